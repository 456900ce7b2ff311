use crate::config::LANDING_ROUTE;
use crate::session::decode_session;

/// Route an entry-point visit from the cookie alone.
///
/// Deliberately no expiry check and no refresh: a stale but structurally
/// valid cookie is enough to pick the personalized landing page, and the
/// next protected page load performs the real check.
pub fn resolve_landing(cookie_value: Option<&str>) -> String {
    match decode_session(cookie_value) {
        Ok(Some(record)) => format!("{}/{}", LANDING_ROUTE.as_str(), record.name),
        Ok(None) => LANDING_ROUTE.to_string(),
        Err(e) => {
            tracing::warn!("Malformed session cookie on landing: {e}");
            LANDING_ROUTE.to_string()
        }
    }
}
