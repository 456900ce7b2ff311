//! Axum integration for the cookie_session crate.
//!
//! Provides the request middleware running the session refresh guard, an
//! `AuthUser` extractor for handlers, the login page and form handlers,
//! and the landing redirector, composed into a single router.

mod config;
mod error;
mod login;
mod middleware;
mod router;
mod session;

pub use config::PASSWORD_RESET_URL;
pub use middleware::refresh_session;
pub use router::{session_router, session_router_no_trace};
pub use session::{AuthRedirect, AuthUser};
