use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use http::request::Parts;

use cookie_session::{LOGIN_ROUTE, SessionRecord};

/// Rejection diverting an unauthenticated request to the login flow, with
/// the original path preserved in the `redirectTo` parameter.
#[derive(Debug)]
pub struct AuthRedirect {
    path: String,
}

impl AuthRedirect {
    fn new(path: String) -> Self {
        Self { path }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        let target = format!(
            "{}?redirectTo={}",
            LOGIN_ROUTE.as_str(),
            urlencoding::encode(&self.path)
        );
        tracing::debug!("Redirecting anonymous request to {target}");
        Redirect::to(&target).into_response()
    }
}

/// Authenticated user information, available as an axum extractor.
///
/// The [`refresh_session`](super::refresh_session) middleware resolves the
/// session cookie and stores the user in the request extensions; this
/// extractor picks it up. Without the middleware it always rejects.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use cookie_session_axum::AuthUser;
///
/// async fn protected_handler(user: AuthUser) -> String {
///     format!("Hello, {}!", user.name)
/// }
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Stable user identifier
    pub name: String,
    /// Opaque external identity reference
    pub cognito_id: Option<String>,
    /// Whether the user has admin privileges
    pub is_admin: bool,
}

impl From<SessionRecord> for AuthUser {
    fn from(record: SessionRecord) -> Self {
        AuthUser {
            is_admin: record.is_admin(),
            name: record.name,
            cognito_id: record.cognito_id,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthRedirect::new(parts.uri.path().to_string()))
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
