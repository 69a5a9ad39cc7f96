//! Backend client implementation
//!
//! The client is constructed once from a project URL and anonymous key and is
//! read-only shared state afterwards; the only interior mutation is the
//! session swap on sign-in/refresh/sign-out. Failures from the hosted service
//! are surfaced as typed errors - the client performs no retries of its own.

use crate::session::{
    Session, TokenResponse, EXPIRY_MARGIN_SECS, SESSION_STORAGE_KEY,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use storage::{StorageAdapter, StorageError};
use thiserror::Error;
use tokio::sync::RwLock;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur during backend operations
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network/transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error with status code, error code, and message
    #[error("API error ({status}): {code} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error code from the service
        code: String,
        /// Error message from the service
        message: String,
    },

    /// Response did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// No active session
    #[error("No active session - please sign in first")]
    NoSession,

    /// Storage adapter error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Shared client initialized twice
    #[error("Shared client already initialized")]
    AlreadyInitialized,

    /// Shared client accessed before initialization
    #[error("Shared client not initialized")]
    NotInitialized,
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Wire shape of an error response from the auth endpoints
///
/// The service uses two error envelopes depending on the endpoint generation;
/// both are accepted here.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    code: Option<serde_json::Value>,
    msg: Option<String>,
}

// =============================================================================
// Configuration
// =============================================================================

/// Auth behavior options
///
/// Defaults match the apps: persist the session through the storage adapter,
/// refresh the token automatically, and leave URL-based session detection off
/// (there is no browser redirect flow in this shell).
#[derive(Clone)]
pub struct AuthOptions {
    /// Device-local storage the session is persisted through
    pub storage: Arc<dyn StorageAdapter>,
    /// Refresh the session token automatically when it nears expiry
    pub auto_refresh_token: bool,
    /// Persist the session through the storage adapter
    pub persist_session: bool,
    /// Detect sessions from redirect URLs (unused outside a browser host)
    pub detect_session_in_url: bool,
}

impl AuthOptions {
    /// Create auth options with the default flags
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self {
            storage,
            auto_refresh_token: true,
            persist_session: true,
            detect_session_in_url: false,
        }
    }

    /// Enable or disable automatic token refresh
    pub fn auto_refresh_token(mut self, enabled: bool) -> Self {
        self.auto_refresh_token = enabled;
        self
    }

    /// Enable or disable session persistence
    pub fn persist_session(mut self, enabled: bool) -> Self {
        self.persist_session = enabled;
        self
    }

    /// Enable or disable URL-based session detection
    pub fn detect_session_in_url(mut self, enabled: bool) -> Self {
        self.detect_session_in_url = enabled;
        self
    }
}

impl std::fmt::Debug for AuthOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthOptions")
            .field("auto_refresh_token", &self.auto_refresh_token)
            .field("persist_session", &self.persist_session)
            .field("detect_session_in_url", &self.detect_session_in_url)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`BackendClient`]
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL (e.g., "https://project.backend.example.com")
    pub url: String,
    /// Anonymous API key, attached to every request
    pub anon_key: String,
    /// Auth behavior options
    pub auth: Option<AuthOptions>,
    /// Request timeout
    pub timeout: Duration,
}

impl BackendConfig {
    /// Create a configuration for the given project
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            auth: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the auth options
    pub fn auth(mut self, auth: AuthOptions) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Client
// =============================================================================

/// Client for the hosted backend
///
/// Construct one per process (see [`crate::shared`]) and share it by
/// reference; the configuration is immutable after construction.
pub struct BackendClient {
    url: String,
    anon_key: String,
    auth: Option<AuthOptions>,
    http: reqwest::Client,
    session: RwLock<Option<Session>>,
}

impl BackendClient {
    /// Create a new client; touches no network
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let key_value = reqwest::header::HeaderValue::from_str(&config.anon_key)
            .map_err(|e| BackendError::Config(format!("invalid anon key: {}", e)))?;
        headers.insert("apikey", key_value);

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("Summit-Prep/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
            auth: config.auth,
            http,
            session: RwLock::new(None),
        })
    }

    /// The project base URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The anonymous API key
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    fn persist_enabled(&self) -> bool {
        self.auth.as_ref().is_some_and(|a| a.persist_session)
    }

    fn auto_refresh_enabled(&self) -> bool {
        self.auth.as_ref().is_some_and(|a| a.auto_refresh_token)
    }

    fn storage(&self) -> Option<&Arc<dyn StorageAdapter>> {
        self.auth.as_ref().map(|a| &a.storage)
    }

    // -------------------------------------------------------------------------
    // Session lifecycle
    // -------------------------------------------------------------------------

    /// Restore a persisted session from the storage adapter
    ///
    /// Returns `Ok(None)` when persistence is off or nothing usable is
    /// stored. An unreadable stored session is discarded with a warning
    /// rather than failing startup. An expired session is refreshed through
    /// the token endpoint when auto-refresh is enabled.
    pub async fn restore_session(&self) -> Result<Option<Session>> {
        if !self.persist_enabled() {
            return Ok(None);
        }
        let storage = match self.storage() {
            Some(storage) => storage,
            None => return Ok(None),
        };

        let stored = match storage.get(SESSION_STORAGE_KEY).await? {
            Some(stored) => stored,
            None => return Ok(None),
        };

        let session: Session = match serde_json::from_str(&stored) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable stored session");
                storage.remove(SESSION_STORAGE_KEY).await?;
                return Ok(None);
            }
        };

        if session.expires_within(Utc::now(), EXPIRY_MARGIN_SECS) {
            if !self.auto_refresh_enabled() {
                tracing::debug!("stored session expired and auto-refresh is off");
                return Ok(None);
            }
            let refreshed = self.refresh_with_token(&session.refresh_token).await?;
            return Ok(Some(refreshed));
        }

        self.store_session(session.clone()).await?;
        Ok(Some(session))
    }

    /// Sign in with email and password
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        #[derive(Serialize)]
        struct PasswordGrant<'a> {
            email: &'a str,
            password: &'a str,
        }

        let session = self
            .token_request("password", &PasswordGrant { email, password })
            .await?;

        tracing::debug!(user = %session.user.id, "signed in");
        self.store_session(session.clone()).await?;
        Ok(session)
    }

    /// Refresh the current session through the token endpoint
    pub async fn refresh_session(&self) -> Result<Session> {
        let refresh_token = {
            let session = self.session.read().await;
            session
                .as_ref()
                .map(|s| s.refresh_token.clone())
                .ok_or(BackendError::NoSession)?
        };

        self.refresh_with_token(&refresh_token).await
    }

    /// The current in-memory session, if any
    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// The current session, refreshed first if it is about to expire
    ///
    /// Requires an active session; refreshes only when auto-refresh is
    /// enabled, otherwise the near-expiry session is returned as-is.
    pub async fn ensure_fresh(&self) -> Result<Session> {
        let session = self.current_session().await.ok_or(BackendError::NoSession)?;

        if session.expires_within(Utc::now(), EXPIRY_MARGIN_SECS) && self.auto_refresh_enabled() {
            return self.refresh_with_token(&session.refresh_token).await;
        }

        Ok(session)
    }

    /// Sign out: clear the in-memory session and the persisted copy
    pub async fn sign_out(&self) -> Result<()> {
        {
            let mut session = self.session.write().await;
            *session = None;
        }

        if self.persist_enabled() {
            if let Some(storage) = self.storage() {
                storage.remove(SESSION_STORAGE_KEY).await?;
            }
        }

        tracing::debug!("signed out");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    async fn refresh_with_token(&self, refresh_token: &str) -> Result<Session> {
        #[derive(Serialize)]
        struct RefreshGrant<'a> {
            refresh_token: &'a str,
        }

        let session = self
            .token_request("refresh_token", &RefreshGrant { refresh_token })
            .await?;

        tracing::debug!(user = %session.user.id, "session refreshed");
        self.store_session(session.clone()).await?;
        Ok(session)
    }

    /// POST to the token endpoint with the given grant type and body
    async fn token_request<B: Serialize>(&self, grant_type: &str, body: &B) -> Result<Session> {
        let url = format!("{}/auth/v1/token", self.url);

        let response = self
            .http
            .post(&url)
            .query(&[("grant_type", grant_type)])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &text));
        }

        let token: TokenResponse = serde_json::from_str(&text).map_err(|e| {
            BackendError::MalformedResponse(format!("token response: {}", e))
        })?;

        Ok(token.into_session(Utc::now()))
    }

    /// Build an API error from a non-2xx response body
    fn api_error(status: u16, body: &str) -> BackendError {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
            let code = parsed
                .error
                .or_else(|| parsed.code.map(|c| c.to_string().trim_matches('"').to_string()))
                .unwrap_or_else(|| "unknown".to_string());
            let message = parsed
                .error_description
                .or(parsed.msg)
                .unwrap_or_else(|| body.to_string());
            BackendError::Api { status, code, message }
        } else {
            BackendError::Api {
                status,
                code: "unknown".to_string(),
                message: body.to_string(),
            }
        }
    }

    /// Swap the in-memory session and persist it when configured to
    async fn store_session(&self, new_session: Session) -> Result<()> {
        if self.persist_enabled() {
            if let Some(storage) = self.storage() {
                let json = serde_json::to_string(&new_session).map_err(StorageError::from)?;
                storage.set(SESSION_STORAGE_KEY, &json).await?;
            }
        }

        let mut session = self.session.write().await;
        *session = Some(new_session);
        Ok(())
    }
}
