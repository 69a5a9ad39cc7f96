//! Session data for the hosted backend
//!
//! A session is the token pair issued by the auth endpoint plus the signed-in
//! user. The access token is treated as opaque; expiry is tracked with the
//! `expires_in` the server reports, converted to an absolute timestamp at
//! receipt.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Storage key the session is persisted under
pub const SESSION_STORAGE_KEY: &str = "summit-prep.auth.session";

/// Seconds before expiry at which the session counts as stale and is
/// refreshed ahead of use
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User id assigned by the backend
    pub id: String,
    /// Email address
    pub email: String,
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque access token sent as a bearer credential
    pub access_token: String,
    /// Opaque refresh token used to obtain a new session
    pub refresh_token: String,
    /// Token type reported by the server (always "bearer" today)
    pub token_type: String,
    /// Absolute expiry of the access token
    pub expires_at: DateTime<Utc>,
    /// The signed-in user
    pub user: UserInfo,
}

impl Session {
    /// Check whether the access token has expired as of `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check whether the access token expires within the given margin
    pub fn expires_within(&self, now: DateTime<Utc>, margin_secs: i64) -> bool {
        now + Duration::seconds(margin_secs) >= self.expires_at
    }
}

/// Wire shape of a successful token-endpoint response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: UserInfo,
}

impl TokenResponse {
    /// Convert to a session, anchoring expiry at `now`
    pub(crate) fn into_session(self, now: DateTime<Utc>) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            expires_at: now + Duration::seconds(self.expires_in),
            user: self.user,
        }
    }
}
