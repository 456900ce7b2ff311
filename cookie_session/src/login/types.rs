use http::header::HeaderMap;
use serde::Deserialize;

use crate::session::SessionRecord;

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Post-login destination, usually carried over from the guard's
    /// `redirectTo` parameter via a hidden form field.
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Result of a login submission.
///
/// Failures are structured results handed back to the form, never
/// redirects; only a successful login redirects.
#[derive(Debug)]
pub enum LoginOutcome {
    Success {
        user: SessionRecord,
        set_cookie: HeaderMap,
        destination: String,
    },
    Rejected(LoginRejection),
}

/// Inline form failure, echoing the submitted values back so the form is
/// not blanked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRejection {
    pub username: String,
    pub password: String,
    pub error: String,
    /// Offer the password-reset affordance only when the provider
    /// specifically rejected the credentials.
    pub show_reset: bool,
}
