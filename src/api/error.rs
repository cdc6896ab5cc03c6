//! API error type and its mapping onto HTTP responses.

use crate::{
    api::dto::ErrorResponse,
    errors::{Error, ErrorKind},
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A store, validation or configuration error
    #[error(transparent)]
    Budget(#[from] Error),

    /// The requested resource does not exist
    #[error("not found")]
    NotFound,

    /// The request body could not be decoded
    #[error("bad request : {0}")]
    BadRequest(String),

    /// The request body exceeded the configured limit
    #[error("payload too large")]
    PayloadTooLarge,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Everything but an oversized body (including a missing content type) is a 400.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Budget(err) => match err.kind() {
                ErrorKind::Validation => (StatusCode::BAD_REQUEST, format!("bad request : {err}")),
                ErrorKind::NotFound => (StatusCode::NOT_FOUND, format!("not found : {err}")),
                ErrorKind::Internal => {
                    error!("Request failed: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "server error".to_string(),
                    )
                }
            },
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(Error::validation("budget", "Invalid value")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(Error::EnvelopeNotFound { index: 9 }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(Error::Internal {
                    message: "boom".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (
                ApiError::BadRequest("bad json".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_validation_message() {
        let error = ApiError::from(Error::validation("envelopes[0].a", "Invalid value"));
        assert_eq!(
            error.to_string(),
            "Invalid value at envelopes[0].a",
            "transparent display keeps the core message"
        );
    }
}
