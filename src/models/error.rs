//! Errors surfaced by the weather endpoint.

use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

pub const MISSING_LOCATION_MESSAGE: &str = "City or latitude/longitude parameters are required";
pub const MISSING_API_KEY_MESSAGE: &str = "Server configuration error: API Key missing";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error from external weather service";
pub const UPSTREAM_UNREACHABLE_MESSAGE: &str = "No response from external weather service";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Terminal failure of a relay request
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{}", MISSING_LOCATION_MESSAGE)]
    MissingLocation,

    #[error("{}", MISSING_API_KEY_MESSAGE)]
    Configuration,

    /// The provider answered with a non-2xx status
    #[error("{message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("{}", UPSTREAM_UNREACHABLE_MESSAGE)]
    UpstreamUnreachable,

    /// Detail is for logs only; callers get the generic message
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Body returned to the caller
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            RelayError::UpstreamStatus { status, message } => {
                ErrorResponse::with_code(message.clone(), *status)
            }
            RelayError::Internal(_) => ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
            other => ErrorResponse::new(other.to_string()),
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingLocation => StatusCode::BAD_REQUEST,
            RelayError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            RelayError::Configuration
            | RelayError::UpstreamUnreachable
            | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::MissingLocation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::Configuration.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::UpstreamUnreachable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::UpstreamStatus {
                status: 401,
                message: "Invalid API key".into()
            }
            .status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_response_bodies() {
        assert_eq!(
            RelayError::MissingLocation.to_response(),
            ErrorResponse::new(MISSING_LOCATION_MESSAGE)
        );
        assert_eq!(
            RelayError::Configuration.to_response(),
            ErrorResponse::new(MISSING_API_KEY_MESSAGE)
        );
        assert_eq!(
            RelayError::UpstreamStatus {
                status: 404,
                message: "city not found".into()
            }
            .to_response(),
            ErrorResponse::with_code("city not found", 404)
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = RelayError::Internal("relative URL without a base".into());
        assert!(err.to_string().contains("relative URL"));
        assert_eq!(err.to_response(), ErrorResponse::new(INTERNAL_ERROR_MESSAGE));
    }
}
