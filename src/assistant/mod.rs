//! Assistant completion: flattens a chat transcript into one prompt and relays
//! it to the text-generation API.

pub mod handler;
pub mod model;
pub mod prompt;
pub mod routes;
pub mod service;
