use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use http::header::SET_COOKIE;

use cookie_session::{CognitoClient, SessionState, resolve_session, session_cookie_from_headers};

use super::session::AuthUser;

/// Session refresh guard, applied as middleware to protected routes.
///
/// Resolves the session cookie on every request, refreshing it against
/// the identity provider at most once when expired. An authenticated user
/// is stored in the request extensions for the [`AuthUser`] extractor; a
/// session that could not be recovered answers with a 303 redirect to the
/// login flow carrying the original path.
pub async fn refresh_session(mut req: Request, next: Next) -> Response {
    let cookie_value = match session_cookie_from_headers(req.headers()) {
        Ok(value) => value,
        Err(e) => {
            // An unreadable cookie header is treated like an absent cookie
            tracing::warn!("Ignoring unreadable cookie header: {e}");
            None
        }
    };

    let current_path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();

    match resolve_session(&CognitoClient, cookie_value.as_deref(), &current_path).await {
        SessionState::Authenticated { user, set_cookie } => {
            req.extensions_mut().insert(AuthUser::from(user));
            let mut response = next.run(req).await;
            // A silent refresh rewrites the cookie on the way out
            if let Some(headers) = set_cookie {
                for value in headers.get_all(SET_COOKIE) {
                    response.headers_mut().append(SET_COOKIE, value.clone());
                }
            }
            response
        }
        SessionState::Anonymous => next.run(req).await,
        SessionState::RedirectToLogin { target } => {
            tracing::debug!("Session not recoverable, redirecting to {target}");
            Redirect::to(&target).into_response()
        }
    }
}
