use http::header::HeaderMap;

use crate::config::LANDING_ROUTE;
use crate::login::types::{LoginForm, LoginOutcome, LoginRejection};
use crate::provider::{AuthError, IdentityProvider, extract_user_from_session};
use crate::session::SessionError;
use crate::session::{clear_session_cookie, set_session_cookie};

/// Prepare the response headers for entering the login page.
///
/// Any existing session cookie is invalidated unconditionally, even a
/// valid one: visiting the login page always presents a clean slate so a
/// user can switch accounts.
pub fn begin_login() -> Result<HeaderMap, SessionError> {
    clear_session_cookie()
}

/// Validate and submit credentials to the identity provider.
///
/// Field checks run cheapest-first and make no network call; each missing
/// field gets its own message with the other field echoed back. Provider
/// failures come back as a rejection carrying the provider's message
/// verbatim.
pub async fn submit_login<P: IdentityProvider>(
    provider: &P,
    form: LoginForm,
) -> Result<LoginOutcome, SessionError> {
    if form.username.is_empty() {
        return Ok(LoginOutcome::Rejected(LoginRejection {
            username: form.username,
            password: form.password,
            error: "Please enter your email address.".to_string(),
            show_reset: false,
        }));
    }

    if form.password.is_empty() {
        return Ok(LoginOutcome::Rejected(LoginRejection {
            username: form.username,
            password: form.password,
            error: "Please enter your password.".to_string(),
            show_reset: false,
        }));
    }

    let session = match provider.authenticate(&form.username, &form.password).await {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!("Login failed for {}: {e}", form.username);
            return Ok(LoginOutcome::Rejected(LoginRejection {
                show_reset: matches!(e, AuthError::NotAuthorized(_)),
                error: e.to_string(),
                username: form.username,
                password: form.password,
            }));
        }
    };

    let user = match extract_user_from_session(&session) {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Authentication response unusable: {e}");
            return Ok(LoginOutcome::Rejected(LoginRejection {
                username: form.username,
                password: form.password,
                error: e.to_string(),
                show_reset: false,
            }));
        }
    };

    let set_cookie = set_session_cookie(&user)?;

    let destination = match form.redirect.as_deref() {
        Some(redirect) if !redirect.is_empty() => redirect.to_string(),
        _ => format!("{}/{}", LANDING_ROUTE.as_str(), form.username),
    };

    tracing::debug!("Logged in {}, redirecting to {destination}", user.name);
    Ok(LoginOutcome::Success {
        user,
        set_cookie,
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderSession;
    use async_trait::async_trait;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use http::header::SET_COOKIE;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockProvider {
        authenticate_result: Result<ProviderSession, AuthError>,
        authenticate_calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(result: Result<ProviderSession, AuthError>) -> Self {
            Self {
                authenticate_result: result,
                authenticate_calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.authenticate_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IdentityProvider for MockProvider {
        async fn authenticate(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<ProviderSession, AuthError> {
            self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
            self.authenticate_result.clone()
        }

        async fn refresh(&self, _refresh_token: &str) -> Result<ProviderSession, AuthError> {
            panic!("login must never refresh");
        }
    }

    fn provider_session_for(username: &str) -> ProviderSession {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let claims = json!({"cognito:username": username, "sub": "sub-1"});
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        ProviderSession {
            id_token: format!("{header}.{payload}.sig"),
            access_token_expires: chrono::Utc::now().timestamp() + 3600,
            refresh_token: "r1".to_string(),
        }
    }

    fn form(username: &str, password: &str, redirect: Option<&str>) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
            redirect: redirect.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_missing_username_rejected_before_any_network_call() {
        let provider = MockProvider::new(Ok(provider_session_for("alice")));
        let outcome = submit_login(&provider, form("", "x", None)).await.unwrap();

        match outcome {
            LoginOutcome::Rejected(rejection) => {
                assert_eq!(rejection.error, "Please enter your email address.");
                assert_eq!(rejection.password, "x");
                assert!(!rejection.show_reset);
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_password_rejected_before_any_network_call() {
        let provider = MockProvider::new(Ok(provider_session_for("alice")));
        let outcome = submit_login(&provider, form("alice", "", None))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Rejected(rejection) => {
                assert_eq!(rejection.error, "Please enter your password.");
                assert_eq!(rejection.username, "alice");
                assert!(!rejection.show_reset);
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_not_authorized_offers_reset_with_verbatim_message() {
        let provider = MockProvider::new(Err(AuthError::NotAuthorized(
            "Incorrect username or password.".to_string(),
        )));
        let outcome = submit_login(&provider, form("alice", "wrong", None))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Rejected(rejection) => {
                assert_eq!(rejection.error, "Incorrect username or password.");
                assert!(rejection.show_reset);
                assert_eq!(rejection.username, "alice");
                assert_eq!(rejection.password, "wrong");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_provider_error_withholds_reset() {
        let provider = MockProvider::new(Err(AuthError::Network("connection reset".to_string())));
        let outcome = submit_login(&provider, form("alice", "pw", None))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Rejected(rejection) => assert!(!rejection.show_reset),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_defaults_to_per_user_landing() {
        let provider = MockProvider::new(Ok(provider_session_for("alice")));
        let outcome = submit_login(&provider, form("alice", "pw", None))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Success {
                user,
                set_cookie,
                destination,
            } => {
                assert_eq!(destination, "/home/alice");
                assert_eq!(user.name, "alice");
                assert!(set_cookie.get(SET_COOKIE).is_some());
            }
            other => panic!("expected Success, got {other:?}"),
        }
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_honors_pending_redirect() {
        let provider = MockProvider::new(Ok(provider_session_for("alice")));
        let outcome = submit_login(&provider, form("alice", "pw", Some("/projects/7")))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Success { destination, .. } => {
                assert_eq!(destination, "/projects/7");
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_redirect_falls_back_to_default() {
        let provider = MockProvider::new(Ok(provider_session_for("alice")));
        let outcome = submit_login(&provider, form("alice", "pw", Some("")))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Success { destination, .. } => {
                assert_eq!(destination, "/home/alice");
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unusable_token_response_rejected_inline() {
        let provider = MockProvider::new(Ok(ProviderSession {
            id_token: "garbage".to_string(),
            access_token_expires: 0,
            refresh_token: "r1".to_string(),
        }));
        let outcome = submit_login(&provider, form("alice", "pw", None))
            .await
            .unwrap();
        match outcome {
            LoginOutcome::Rejected(rejection) => assert!(!rejection.show_reset),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_begin_login_clears_the_session_cookie() {
        let headers = begin_login().unwrap();
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("loggedIn=;"));
        assert!(cookie.contains("Max-Age=-86400"));
    }
}
