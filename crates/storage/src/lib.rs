//! Storage layer for Summit Prep
//!
//! This crate provides the device-local storage adapters used for session
//! persistence and user preferences: an in-memory store for tests and
//! ephemeral runs, and a checksummed file-backed store with atomic writes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod file;

pub use adapter::{MemoryStorage, StorageAdapter, StorageError};
pub use file::{FileStorage, FileStorageConfig};
