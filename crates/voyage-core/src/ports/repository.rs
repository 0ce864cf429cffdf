use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - an append-only collection of user posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Assign an identifier and timestamp to the submission and store it.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// All stored posts in creation order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;
}
