//! Price lookup: batches coin identifiers into one upstream quote request.

pub mod handler;
pub mod model;
pub mod routes;
pub mod service;
