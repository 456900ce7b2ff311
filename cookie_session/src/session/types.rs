use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated identity and its credentials window, carried by the
/// session cookie.
///
/// The cookie is the only place a record is persisted; the server keeps no
/// session table. A decoded record is never mutated — refresh replaces it
/// wholesale with a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Stable user identifier, also the path segment of the landing page.
    pub name: String,
    /// Opaque external identity reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognito_id: Option<String>,
    /// Admin flag; absent means not an admin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    /// Instant the access credential becomes invalid, in epoch seconds.
    pub access_token_expires: i64,
    /// Used solely to obtain a new record. Never script-readable; the
    /// cookie carrying it is HttpOnly.
    pub refresh_token: String,
}

impl SessionRecord {
    pub fn is_admin(&self) -> bool {
        self.admin.unwrap_or(false)
    }

    /// Whether the access credential is past its expiry at `now`.
    /// `access_token_expires` is in seconds, not milliseconds.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.access_token_expires
    }
}
