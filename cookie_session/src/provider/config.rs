use std::sync::LazyLock;
use std::time::Duration;

/// InitiateAuth endpoint of the identity provider, e.g.
/// `https://cognito-idp.us-east-1.amazonaws.com/`.
pub(super) static PROVIDER_ENDPOINT: LazyLock<String> = LazyLock::new(|| {
    std::env::var("PROVIDER_ENDPOINT")
        .unwrap_or_else(|_| "https://cognito-idp.us-east-1.amazonaws.com/".to_string())
});

/// App client id registered with the provider.
pub(super) static PROVIDER_CLIENT_ID: LazyLock<String> =
    LazyLock::new(|| std::env::var("PROVIDER_CLIENT_ID").unwrap_or_default());

/// Upper bound on a provider round trip. A timed-out refresh counts as a
/// refresh failure and routes the user to re-login.
pub(super) static PROVIDER_TIMEOUT: LazyLock<Duration> = LazyLock::new(|| {
    let secs = std::env::var("PROVIDER_TIMEOUT_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    Duration::from_secs(secs)
});

#[cfg(test)]
mod tests {

    fn get_timeout_seconds(env_value: Option<&str>) -> u64 {
        env_value.and_then(|s| s.parse().ok()).unwrap_or(5)
    }

    #[test]
    fn test_timeout_default() {
        assert_eq!(get_timeout_seconds(None), 5);
    }

    #[test]
    fn test_timeout_custom() {
        assert_eq!(get_timeout_seconds(Some("10")), 10);
    }

    #[test]
    fn test_timeout_invalid_falls_back() {
        assert_eq!(get_timeout_seconds(Some("soon")), 5);
    }
}
