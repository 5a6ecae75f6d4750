//! API error responses.
//!
//! Two expected error kinds exist: a missing record (404) and a blank name
//! (400). Both render as `{"error": <message>}`. Anything unexpected is a
//! panic caught by the server's panic layer and rendered as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Expected handler failures, rendered as `{"error": ...}` bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Assistant not found")]
    NotFound,
    #[error("Name is required")]
    NameRequired,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NameRequired => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
