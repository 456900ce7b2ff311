use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("loggedIn".to_string())
});

/// Cookie lifetime in seconds, reset on every issue and refresh.
pub static SESSION_COOKIE_MAX_AGE: LazyLock<i64> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 60 * 24 * 30) // Default to 30 days if not set or invalid
});

/// Marks the deployment as a local development environment.
pub(crate) static DEV_MODE: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("DEV_MODE")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
});

/// Opt-out of the `Secure` cookie attribute. Only honored together with
/// DEV_MODE; production deployments always send `Secure`.
pub(crate) static ALLOW_INSECURE_HTTP: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("ALLOW_INSECURE_HTTP")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
});
