//! Central configuration for the cookie_session crate

use std::sync::LazyLock;

/// Path of the login page, the target of forced re-authentication
/// redirects. Default: "/login"
pub static LOGIN_ROUTE: LazyLock<String> =
    LazyLock::new(|| std::env::var("LOGIN_ROUTE").unwrap_or_else(|_| "/login".to_string()));

/// Entry page for anonymous visitors. Authenticated users land at
/// `{LANDING_ROUTE}/{name}`. Default: "/home"
pub static LANDING_ROUTE: LazyLock<String> =
    LazyLock::new(|| std::env::var("LANDING_ROUTE").unwrap_or_else(|_| "/home".to_string()));
