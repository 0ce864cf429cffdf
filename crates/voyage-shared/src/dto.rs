//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use voyage_core::domain::Destination;

/// Post submission body. Fields are optional so that missing values surface as
/// a validation error instead of a decoding error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Contact form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Newsletter sign-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: Option<String>,
}

/// Response for the destination catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationsResponse {
    pub destinations: Vec<Destination>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_request_reads_camel_case() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"title":"t","imageUrl":"https://example.com/x.jpg","description":"d"}"#,
        )
        .unwrap();
        assert_eq!(req.image_url.as_deref(), Some("https://example.com/x.jpg"));
    }

    #[test]
    fn test_partial_bodies_decode() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title":"only"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("only"));
        assert!(req.description.is_none());

        let contact: ContactRequest = serde_json::from_str("{}").unwrap();
        assert!(contact.email.is_none());
    }
}
