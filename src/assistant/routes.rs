use axum::{routing::post, Router};

use crate::assistant::{handler, service::AssistantService};

pub fn assistant_routes(service: AssistantService) -> Router {
  Router::new()
      .route("/gemini-assistant", post(handler::complete))
      .with_state(service)
}
