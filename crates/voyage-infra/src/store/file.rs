//! JSON-file post store.
//!
//! The whole post sequence is held in memory and rewritten to disk after
//! every creation. Loading never fails: a missing or unreadable file yields
//! an empty store, and records that do not decode as a post are skipped one
//! by one. Skipped records are gone from the file after the next write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::RwLock;

use voyage_core::domain::{NewPost, Post};
use voyage_core::error::RepoError;
use voyage_core::ports::PostRepository;

use super::IdSequence;

struct StoreState {
    posts: Vec<Post>,
    ids: IdSequence,
}

/// Post store backed by a single pretty-printed JSON array on disk.
pub struct JsonFilePostStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFilePostStore {
    /// Open the store, loading any posts already present in `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let posts = load_posts(&path).await;

        tracing::info!(path = %path.display(), count = posts.len(), "Post store loaded");

        Self {
            state: RwLock::new(StoreState {
                ids: IdSequence::after(&posts),
                posts,
            }),
            path,
        }
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), RepoError> {
        let json = serde_json::to_string_pretty(posts)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

async fn load_posts(path: &Path) -> Vec<Post> {
    let data = match fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Posts file not found, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error reading posts file");
            return Vec::new();
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&data) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error parsing posts file");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Post>(record) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    index,
                    error = %e,
                    "Skipping unreadable post record"
                );
                None
            }
        })
        .collect()
}

#[async_trait]
impl PostRepository for JsonFilePostStore {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        // Held across the file write so concurrent creations cannot drop each other.
        let mut state = self.state.write().await;

        let now = Utc::now();
        let post = Post::new(state.ids.next(now.timestamp_millis()), new_post, now);
        state.posts.push(post.clone());

        // The post stays in memory even if the write fails.
        if let Err(e) = self.persist(&state.posts).await {
            tracing::error!(
                path = %self.path.display(),
                post_id = %post.id,
                error = %e,
                "Error writing posts file"
            );
        }

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.state.read().await.posts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            image_url: "https://example.com/photo.jpg".to_string(),
            description: "A day by the sea".to_string(),
        }
    }

    async fn read_file(path: &Path) -> Vec<Post> {
        let data = fs::read_to_string(path).await.unwrap();
        serde_json::from_str(&data).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFilePostStore::open(dir.path().join("posts.json")).await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, "{ not json").await.unwrap();

        let store = JsonFilePostStore::open(&path).await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_record_does_not_discard_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let good = Post::new(1_700_000_000_000, new_post("kept"), Utc::now());
        let raw = serde_json::json!([
            good,
            { "id": "post-1700000000001", "title": "no timestamp", "imageUrl": "u", "description": "d" },
            { "id": "post-1700000000002", "title": 7, "imageUrl": "u", "description": "d", "createdAt": "2024-05-01T10:00:00Z" }
        ]);
        fs::write(&path, raw.to_string()).await.unwrap();

        let store = JsonFilePostStore::open(&path).await;
        assert_eq!(store.list().await.unwrap(), vec![good.clone()]);

        let next = store.create(new_post("after")).await.unwrap();
        assert_eq!(read_file(&path).await, vec![good, next]);
    }

    #[tokio::test]
    async fn test_max_id_in_file_does_not_panic_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let existing = Post::new(i64::MAX, new_post("hand edited"), Utc::now());
        fs::write(&path, serde_json::to_string_pretty(&vec![existing]).unwrap())
            .await
            .unwrap();

        let store = JsonFilePostStore::open(&path).await;
        let post = store.create(new_post("next")).await.unwrap();
        assert_eq!(post.id_millis(), Some(i64::MAX));
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_writes_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let store = JsonFilePostStore::open(&path).await;

        let post = store.create(new_post("Santorini sunset")).await.unwrap();
        assert!(post.id.starts_with("post-"));

        let raw = fs::read_to_string(&path).await.unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"imageUrl\""));
        assert_eq!(read_file(&path).await, vec![post]);
    }

    #[tokio::test]
    async fn test_sequential_creates_keep_order_and_distinct_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let store = JsonFilePostStore::open(&path).await;

        let first = store.create(new_post("first")).await.unwrap();
        let second = store.create(new_post("second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let on_disk = read_file(&path).await;
        assert_eq!(on_disk, vec![first, second]);
    }

    #[tokio::test]
    async fn test_reopen_reloads_posts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");

        let created = {
            let store = JsonFilePostStore::open(&path).await;
            store.create(new_post("Taj at dawn")).await.unwrap()
        };

        let reopened = JsonFilePostStore::open(&path).await;
        assert_eq!(reopened.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_ids_continue_after_loaded_posts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let future_millis = Utc::now().timestamp_millis() + 60_000;

        let existing = Post::new(future_millis, new_post("from the future"), Utc::now());
        fs::write(&path, serde_json::to_string_pretty(&vec![existing]).unwrap())
            .await
            .unwrap();

        let store = JsonFilePostStore::open(&path).await;
        let post = store.create(new_post("now")).await.unwrap();
        assert_eq!(post.id_millis(), Some(future_millis + 1));
    }

    #[tokio::test]
    async fn test_write_failure_keeps_post_in_memory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("posts.json");
        let store = JsonFilePostStore::open(&path).await;

        let post = store.create(new_post("unsaved")).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec![post]);
        assert!(!path.exists());
    }
}
