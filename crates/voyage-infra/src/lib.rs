//! # Voyage Infrastructure
//!
//! Concrete implementations of the ports defined in `voyage-core`:
//!
//! - [`StaticDestinationCatalog`] - the hardcoded destination catalog
//! - [`JsonFilePostStore`] - posts mirrored to a pretty-printed JSON file
//! - [`InMemoryPostStore`] - posts kept in process memory only

pub mod catalog;
pub mod store;

pub use catalog::StaticDestinationCatalog;
pub use store::{InMemoryPostStore, JsonFilePostStore};
