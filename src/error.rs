//! Error taxonomy for the HTTP surface.
//!
//! Every failure a handler can produce maps to exactly one status code:
//! auth failures to 401, request validation failures to 400, anything
//! else to 500. Internal errors are logged with an opaque id and the id
//! alone is returned to the caller.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// Authorization header rejection. All variants surface as 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header required")]
    MissingHeader,
    #[error("Invalid authorization header format")]
    MalformedHeader,
    #[error("Invalid authentication scheme")]
    InvalidScheme,
    #[error("Invalid authentication token")]
    InvalidToken,
}

/// Request body rejection. All variants surface as 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Query is required")]
    MissingQuery,
    #[error("Request body must be a JSON object")]
    InvalidBody,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Auth(err) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                // The cause stays in the server log; the caller only sees
                // an id to quote when reporting the problem.
                let error_id = Uuid::new_v4();
                error!(%error_id, "unhandled error processing request: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal server error",
                        "error_id": error_id,
                    })),
                )
                    .into_response()
            }
        }
    }
}
