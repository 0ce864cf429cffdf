//! Error handling - maps failures to the shared error payload.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;
use voyage_shared::ErrorResponse;

/// Application-level error type rendered as an [`ErrorResponse`].
///
/// Every variant carries the message shown to the client.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            AppError::NotFound(msg) => ErrorResponse::not_found(msg),
            AppError::Internal(msg) => ErrorResponse::internal_error(msg),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<voyage_core::DomainError> for AppError {
    fn from(err: voyage_core::DomainError) -> Self {
        match err {
            voyage_core::DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_validation_maps_to_400_payload() {
        let err: AppError =
            voyage_core::DomainError::Validation("All fields are required".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let payload: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload.error, "All fields are required");
        assert_eq!(payload.status, 400);
    }
}
