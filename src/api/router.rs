use axum::{routing::get, Json, Router};
use http::StatusCode;
use reqwest::Client;
use serde_json::json;
use tower_http::{
  compression::CompressionLayer,
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  assistant::{
      routes::assistant_routes,
      service::{AssistantService, GeminiConfig},
  },
  config::Config,
  error::AppError,
  market::{routes::market_routes, service::MarketService},
};

pub fn create_router(config: &Config) -> Result<Router, AppError> {
  // Setup CORS
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  // One connection pool shared by both upstreams
  let client = Client::builder()
      .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

  // Setup services
  let market_service = MarketService::new(client.clone(), config.coingecko_api_url.clone());
  let assistant_service = AssistantService::new(
      client,
      GeminiConfig {
          api_url: config.gemini_api_url.clone(),
          model: config.gemini_model.clone(),
          api_key: config.gemini_api_key.clone(),
      },
  );

  // Setup routes
  let function_routes = Router::new()
      .merge(market_routes(market_service))
      .merge(assistant_routes(assistant_service));

  // Build the router
  let app = Router::new()
      .route("/health", get(health_check))
      .nest("/functions/v1", function_routes)
      .layer(TraceLayer::new_for_http())
      .layer(CompressionLayer::new())
      .layer(cors);

  Ok(app)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}
