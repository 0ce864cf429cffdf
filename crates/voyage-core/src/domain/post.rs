use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Prefix of every generated post identifier.
pub const POST_ID_PREFIX: &str = "post-";

/// Post entity - a user-submitted travel story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post whose identifier is derived from a Unix timestamp in milliseconds.
    pub fn new(id_millis: i64, new_post: NewPost, created_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("{POST_ID_PREFIX}{id_millis}"),
            title: new_post.title,
            image_url: new_post.image_url,
            description: new_post.description,
            created_at,
        }
    }

    /// The millisecond component of a generated identifier, if the id has that shape.
    pub fn id_millis(&self) -> Option<i64> {
        self.id.strip_prefix(POST_ID_PREFIX)?.parse().ok()
    }
}

/// A validated post submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub image_url: String,
    pub description: String,
}

impl NewPost {
    /// Validate a submission. Every field must be present and non-empty.
    pub fn new(
        title: Option<String>,
        image_url: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        match (non_empty(title), non_empty(image_url), non_empty(description)) {
            (Some(title), Some(image_url), Some(description)) => Ok(Self {
                title,
                image_url,
                description,
            }),
            _ => Err(DomainError::Validation("All fields are required".to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
