//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod catalog;
mod repository;

pub use catalog::DestinationCatalog;
pub use repository::PostRepository;
