//! Application state - shared across all handlers.

use std::sync::Arc;

use voyage_core::ports::{DestinationCatalog, PostRepository};
use voyage_infra::{InMemoryPostStore, JsonFilePostStore, StaticDestinationCatalog};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn DestinationCatalog>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let posts: Arc<dyn PostRepository> = match &config.posts_file {
            Some(path) => Arc::new(JsonFilePostStore::open(path).await),
            None => {
                tracing::warn!("POSTS_FILE is empty. Posts will not survive a restart.");
                Arc::new(InMemoryPostStore::new())
            }
        };

        tracing::info!("Application state initialized");

        Self::with_posts(posts)
    }

    /// State over the static catalog and the given post repository.
    pub fn with_posts(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            catalog: Arc::new(StaticDestinationCatalog::new()),
            posts,
        }
    }
}
