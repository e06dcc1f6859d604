#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use edge_relay::{
    config::{AppEnv, Config},
    router::create_router,
};
use serde_json::Value;
use tower::util::ServiceExt;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-pro";

/// Config pointing both upstreams at the given base URLs.
pub fn test_config(coingecko_api_url: &str, gemini_api_url: &str) -> Config {
    Config {
        port: 0,
        host: "127.0.0.1".to_string(),
        app_env: AppEnv::Test,
        coingecko_api_url: coingecko_api_url.to_string(),
        gemini_api_url: gemini_api_url.to_string(),
        gemini_model: TEST_MODEL.to_string(),
        gemini_api_key: TEST_API_KEY.to_string(),
    }
}

pub fn test_app(coingecko_api_url: &str, gemini_api_url: &str) -> Router {
    create_router(&test_config(coingecko_api_url, gemini_api_url))
        .expect("Failed to build router")
}

/// POSTs a raw body and returns the status with the decoded JSON reply.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).expect("Response body was not JSON");

    (status, json)
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

/// A base URL nothing listens on.
pub fn unreachable_url() -> String {
    "http://127.0.0.1:9".to_string()
}
