//! Domain entities - the core business objects.

mod destination;
mod post;

pub use destination::Destination;
pub use post::{NewPost, POST_ID_PREFIX, Post};
