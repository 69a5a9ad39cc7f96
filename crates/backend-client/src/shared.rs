//! Process-wide shared client
//!
//! The apps construct exactly one [`BackendClient`] and every consumer reads
//! the same instance. Initialization happens once, explicitly, at startup;
//! there is no teardown. This replaces the implicit module-level singleton
//! with a documented single-initialization lifecycle.
//!
//! # Example
//!
//! ```rust,no_run
//! use backend_client::{shared, AuthOptions, BackendConfig};
//! use std::sync::Arc;
//! use storage::MemoryStorage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BackendConfig::new("https://project.backend.example.com", "anon-key")
//!     .auth(AuthOptions::new(Arc::new(MemoryStorage::new())));
//!
//! shared::init(config)?;
//! let client = shared::client()?;
//! # Ok(())
//! # }
//! ```

use crate::client::{BackendClient, BackendConfig, BackendError, Result};
use std::sync::{Arc, OnceLock};

static SHARED: OnceLock<Arc<BackendClient>> = OnceLock::new();

/// Initialize the shared client; callable exactly once per process
///
/// Returns the new instance, or [`BackendError::AlreadyInitialized`] if a
/// shared client exists.
pub fn init(config: BackendConfig) -> Result<Arc<BackendClient>> {
    let client = Arc::new(BackendClient::new(config)?);

    SHARED
        .set(client.clone())
        .map_err(|_| BackendError::AlreadyInitialized)?;

    tracing::debug!(url = %client.url(), "shared backend client initialized");
    Ok(client)
}

/// The shared client
///
/// Every call returns a handle to the same instance. Errors with
/// [`BackendError::NotInitialized`] before [`init`] has run.
pub fn client() -> Result<Arc<BackendClient>> {
    SHARED.get().cloned().ok_or(BackendError::NotInitialized)
}

/// Whether the shared client has been initialized
pub fn is_initialized() -> bool {
    SHARED.get().is_some()
}
