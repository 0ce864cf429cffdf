//! # Voyage Core
//!
//! The domain layer of the Voyage travel-content backend.
//! This crate contains the entities and the ports that infrastructure implements;
//! it has no knowledge of HTTP or the filesystem.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
