//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Bad or missing credentials. Deliberately carries no detail: the
  /// response never distinguishes a wrong password from an unknown user.
  #[error("invalid credentials")]
  Unauthorized,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    let body = Json(json!({ "error": message }));
    if status == StatusCode::UNAUTHORIZED {
      (
        status,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"ofivote\"")],
        body,
      )
        .into_response()
    } else {
      (status, body).into_response()
    }
  }
}
