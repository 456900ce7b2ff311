//! Central configuration for the cookie_session_axum crate

use std::sync::LazyLock;

/// Where the password-reset affordance on the login form points.
/// Default: "/reset"
pub static PASSWORD_RESET_URL: LazyLock<String> =
    LazyLock::new(|| std::env::var("PASSWORD_RESET_URL").unwrap_or_else(|_| "/reset".to_string()));

#[cfg(test)]
mod tests {

    fn get_password_reset_url(env_value: Option<&str>) -> String {
        env_value
            .map(|s| s.to_string())
            .unwrap_or_else(|| "/reset".to_string())
    }

    #[test]
    fn test_password_reset_url_default() {
        assert_eq!(get_password_reset_url(None), "/reset");
    }

    #[test]
    fn test_password_reset_url_custom() {
        assert_eq!(
            get_password_reset_url(Some("/account/reset")),
            "/account/reset"
        );
    }
}
