//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use wardwatch_core::{ErrorKind, store::StoreError};

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a backend error: wrapped domain errors keep their meaning,
  /// anything else is a storage failure.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.domain() {
      Some(domain) => Self::with_kind(domain.kind(), domain.to_string()),
      None => ApiError::Store(Box::new(e)),
    }
  }

  fn with_kind(kind: ErrorKind, message: String) -> Self {
    match kind {
      ErrorKind::NotFound => ApiError::NotFound(message),
      ErrorKind::Invalid => ApiError::BadRequest(message),
      ErrorKind::Conflict => ApiError::Conflict(message),
    }
  }
}

impl From<wardwatch_core::Error> for ApiError {
  fn from(e: wardwatch_core::Error) -> Self { Self::with_kind(e.kind(), e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "success": false, "error": message }))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn domain_errors_map_to_client_statuses() {
    let cases = [
      (wardwatch_core::Error::BedNotFound(3), StatusCode::NOT_FOUND),
      (wardwatch_core::Error::AlreadyResolved(1), StatusCode::CONFLICT),
      (wardwatch_core::Error::Blank("by"), StatusCode::BAD_REQUEST),
    ];
    for (err, status) in cases {
      assert_eq!(ApiError::from(err).into_response().status(), status);
    }
  }
}
