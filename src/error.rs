//! Centralized API error handling.
//!
//! Every handler returns `Result<_, ApiError>`; the status code and the
//! `{ "message": … }` body are decided in one place here. Backend detail
//! never reaches the response, it goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// API error type with HTTP status code mapping.
///
/// The display string of each variant is exactly the message the client
/// receives.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record exists for the requested id.
    #[error("The user with the specified ID does not exist")]
    NotFound,

    /// The payload failed the name/bio presence check.
    #[error("Please provide name and bio for the user")]
    MissingFields,

    /// The store failed; `message` is the operation-specific body text.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Wraps a store failure with the message the failed operation owns.
    pub fn store(message: &'static str, source: StoreError) -> Self {
        ApiError::Store { message, source }
    }

    /// Get the HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Store { message, source } => {
                tracing::error!(error = %source, %message, "store operation failed");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), reason = %self, "request rejected");
            }
        }

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
