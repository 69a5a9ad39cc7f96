//! Hosted backend client for Summit Prep
//!
//! This crate wraps the hosted backend-as-a-service the apps talk to. The
//! client is bound to a project URL and anonymous key, persists its session
//! through a device-local [`storage::StorageAdapter`], and refreshes the
//! session token automatically when it nears expiry.
//!
//! # Example
//!
//! ```rust,no_run
//! use backend_client::{AuthOptions, BackendClient, BackendConfig};
//! use std::sync::Arc;
//! use storage::MemoryStorage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BackendConfig::new(
//!         "https://project.backend.example.com",
//!         "anon-key",
//!     )
//!     .auth(AuthOptions::new(Arc::new(MemoryStorage::new())));
//!
//!     let client = BackendClient::new(config)?;
//!     let session = client.sign_in("student@example.com", "password").await?;
//!     println!("Signed in as {}", session.user.email);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod session;
pub mod shared;

pub use client::{AuthOptions, BackendClient, BackendConfig, BackendError};
pub use session::{Session, UserInfo};

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;
