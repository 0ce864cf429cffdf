//! Post storage backends.

mod file;
mod memory;

pub use file::JsonFilePostStore;
pub use memory::InMemoryPostStore;

use voyage_core::domain::Post;

/// Issues strictly increasing millisecond values for post identifiers.
///
/// Uses the wall clock when it has moved past the last issued value and
/// otherwise bumps by one, so two posts created in the same millisecond
/// still get distinct ids. Saturates at `i64::MAX`, which only a hand-edited
/// posts file can reach.
#[derive(Debug, Default, Clone, Copy)]
struct IdSequence {
    last: i64,
}

impl IdSequence {
    /// Seed from existing posts so reloaded ids are never reissued.
    fn after(posts: &[Post]) -> Self {
        let last = posts.iter().filter_map(Post::id_millis).max().unwrap_or(0);
        Self { last }
    }

    fn next(&mut self, now_millis: i64) -> i64 {
        self.last = now_millis.max(self.last.saturating_add(1));
        self.last
    }
}
