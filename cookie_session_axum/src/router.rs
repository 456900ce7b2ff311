//! Combined router for the login and landing endpoints

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use cookie_session::LOGIN_ROUTE;

use super::login::{landing, login_page, login_submit};

/// Create the router for the session endpoints:
/// - `GET /` — landing redirector
/// - `GET {LOGIN_ROUTE}` — login page (clears the session cookie)
/// - `POST {LOGIN_ROUTE}` — credential submission
///
/// Protected application routes are not part of this router; apply
/// [`refresh_session`](super::refresh_session) to them as middleware.
pub fn session_router() -> Router {
    session_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`session_router`] but without HTTP tracing middleware, for
/// applications that bring their own.
pub fn session_router_no_trace() -> Router {
    Router::new()
        .route("/", get(landing))
        .route(LOGIN_ROUTE.as_str(), get(login_page).post(login_submit))
}
