use axum::{
  response::{IntoResponse, Response},
  Json,
};
use http::StatusCode;
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("{0}")]
  ValidationError(String),

  #[error("{0}")]
  UpstreamError(String),

  #[error("{0}")]
  InternalError(String),

  #[error("Config error: {0}")]
  ConfigError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      // The request URL can carry the upstream credential
      Self::UpstreamError(err.without_url().to_string())
  }
}

impl From<validator::ValidationErrors> for AppError {
  fn from(errors: validator::ValidationErrors) -> Self {
      let mut fields: Vec<&str> = errors.field_errors().into_keys().collect();
      fields.sort_unstable();

      match fields.first() {
          Some(field) => Self::ValidationError(format!("Invalid {} parameter", field)),
          None => Self::ValidationError("Invalid request".to_string()),
      }
  }
}

impl AppError {
  pub fn status_code(&self) -> StatusCode {
      match self {
          AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
          AppError::UpstreamError(_) | AppError::InternalError(_) | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let status = self.status_code();
      let error = match &self {
          AppError::ValidationError(msg) => {
              tracing::warn!(error = %msg, "Rejected request");
              msg.clone()
          }
          AppError::UpstreamError(msg) => {
              tracing::error!(error = %msg, "Upstream request failed");
              msg.clone()
          }
          AppError::InternalError(msg) => {
              tracing::error!(error = %msg, "Request failed");
              msg.clone()
          }
          AppError::ConfigError(msg) => {
              tracing::error!(error = %msg, "Configuration error");
              "A configuration error occurred".to_string()
          }
      };

      (status, Json(ErrorResponse { error })).into_response()
  }
}
