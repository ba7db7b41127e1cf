//! Error taxonomy for the HTTP surface.
//!
//! Read paths never reach this module with upstream failures (they degrade
//! to fallback data inside the handlers); what arrives here is caller
//! error, generation failure, or a genuine internal fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gateway::GatewayError;
use crate::http::response::json_error;
use crate::proposal::ValidationError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input missing required fields. 400, field named in message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request body. 400.
    #[error("{0}")]
    BadRequest(String),

    /// The externally-owned generation job failed. 500 with detail: there
    /// is no safe local fallback once a webhook is explicitly configured.
    #[error("Proposal generation failed")]
    Generation(#[source] GatewayError),

    /// Anything else caught at the entry point. 500, message surfaced.
    #[error("Internal server error")]
    Internal(String),
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::Generation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(err) => {
                json_error(StatusCode::BAD_REQUEST, &err.to_string(), None)
            }
            ApiError::BadRequest(message) => {
                json_error(StatusCode::BAD_REQUEST, message, None)
            }
            ApiError::Generation(source) => json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &self.to_string(),
                Some(&source.to_string()),
            ),
            ApiError::Internal(details) => json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &self.to_string(),
                Some(details),
            ),
        }
    }
}
