//! Standardized API response payloads.

use serde::{Deserialize, Serialize};

/// Success acknowledgement for fire-and-forget submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Error payload returned by every failing endpoint.
///
/// `error` carries the short, user-facing message the frontend displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Reason phrase of the HTTP status.
    pub title: String,

    pub status: u16,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            title: title.into(),
            status,
        }
    }

    // Common error constructors
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(404, "Not Found", error)
    }

    pub fn internal_error(error: impl Into<String>) -> Self {
        Self::new(500, "Internal Server Error", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_shape() {
        let json = serde_json::to_value(ErrorResponse::bad_request("All fields are required")).unwrap();
        assert_eq!(json["error"], "All fields are required");
        assert_eq!(json["status"], 400);
        assert_eq!(json["title"], "Bad Request");
    }
}
