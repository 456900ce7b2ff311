use chrono::Utc;
use http::header::HeaderMap;

use crate::config::LOGIN_ROUTE;
use crate::provider::{IdentityProvider, ProviderSession, extract_user_from_session};
use crate::session::types::SessionRecord;

use super::codec::decode_session;
use super::cookie::set_session_cookie;

/// Outcome of the per-request session check.
///
/// Callers must handle all three arms explicitly. Refresh failures never
/// surface as errors from [`resolve_session`]; they only appear as the
/// redirect arm, carrying the path the user was trying to reach.
#[derive(Debug)]
pub enum SessionState {
    /// A valid session. `set_cookie` is present only when the record was
    /// silently refreshed and must be rewritten to the client.
    Authenticated {
        user: SessionRecord,
        set_cookie: Option<HeaderMap>,
    },
    /// No usable cookie; the caller proceeds as anonymous.
    Anonymous,
    /// The session expired and could not be refreshed; the caller must
    /// answer with a 303 redirect to `target`.
    RedirectToLogin { target: String },
}

/// Resolve the session carried by `cookie_value` for a request to
/// `current_path`.
///
/// The common path is cheap: a present, unexpired cookie is decoded and
/// returned without any I/O. Only an expired record triggers a provider
/// round trip, and at most one refresh attempt is made per request.
/// Concurrent requests holding the same expired cookie may each refresh
/// independently; the provider serializes its own token store.
pub async fn resolve_session<P: IdentityProvider>(
    provider: &P,
    cookie_value: Option<&str>,
    current_path: &str,
) -> SessionState {
    let record = match decode_session(cookie_value) {
        Ok(Some(record)) => record,
        Ok(None) => return SessionState::Anonymous,
        Err(e) => {
            // A malformed cookie cannot contain a usable refresh token, so
            // it is handled like an absent one rather than refreshed.
            tracing::warn!("Discarding malformed session cookie: {e}");
            return SessionState::Anonymous;
        }
    };

    if !record.is_expired_at(Utc::now()) {
        return SessionState::Authenticated {
            user: record,
            set_cookie: None,
        };
    }

    if record.refresh_token.is_empty() {
        tracing::debug!("Expired session without refresh token for {}", record.name);
        return redirect_to_login(current_path);
    }

    match provider.refresh(&record.refresh_token).await {
        Ok(session) => refreshed_state(&session, current_path),
        Err(e) => {
            // The cookie is left untouched; entering the login page clears it.
            tracing::debug!("Session refresh failed for {}: {e}", record.name);
            redirect_to_login(current_path)
        }
    }
}

// Turn a successful refresh into a brand-new authenticated session with a
// rewritten cookie. Anything unusable in the provider's response still
// routes to re-login instead of propagating.
fn refreshed_state(session: &ProviderSession, current_path: &str) -> SessionState {
    let user = match extract_user_from_session(session) {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Refresh response unusable: {e}");
            return redirect_to_login(current_path);
        }
    };

    let set_cookie = match set_session_cookie(&user) {
        Ok(headers) => headers,
        Err(e) => {
            tracing::error!("Failed to build refreshed session cookie: {e}");
            return redirect_to_login(current_path);
        }
    };

    tracing::debug!("Silently refreshed session for {}", user.name);
    SessionState::Authenticated {
        user,
        set_cookie: Some(set_cookie),
    }
}

fn redirect_to_login(current_path: &str) -> SessionState {
    SessionState::RedirectToLogin {
        target: format!(
            "{}?redirectTo={}",
            LOGIN_ROUTE.as_str(),
            urlencoding::encode(current_path)
        ),
    }
}
