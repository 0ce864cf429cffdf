//! In-memory post store - used when no backing file is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use voyage_core::domain::{NewPost, Post};
use voyage_core::error::RepoError;
use voyage_core::ports::PostRepository;

use super::IdSequence;

/// Post store that keeps everything in process memory.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostStore {
    inner: RwLock<(Vec<Post>, IdSequence)>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut guard = self.inner.write().await;
        let (posts, ids) = &mut *guard;

        let now = Utc::now();
        let post = Post::new(ids.next(now.timestamp_millis()), new_post, now);
        posts.push(post.clone());

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.inner.read().await.0.clone())
    }
}
