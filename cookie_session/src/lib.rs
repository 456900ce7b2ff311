//! cookie_session - Cookie-backed login sessions for web applications
//!
//! This crate issues, validates, and transparently refreshes a user's
//! session stored in a single HTTP cookie. The cookie is the only
//! persistence layer: the server keeps no session table. Expired sessions
//! are refreshed against the identity provider once per request; sessions
//! that cannot be recovered divert the visitor to the login flow with the
//! original destination preserved.

mod config;
mod login;
mod provider;
mod session;
mod utils;

pub use config::{LANDING_ROUTE, LOGIN_ROUTE};

pub use login::{
    LoginForm, LoginOutcome, LoginRejection, begin_login, resolve_landing, submit_login,
};

pub use provider::{
    AuthError, CognitoClient, IdentityProvider, ProviderSession, extract_user_from_session,
};

pub use session::{
    SESSION_COOKIE_NAME, SessionError, SessionRecord, SessionState, decode_session,
    encode_session, resolve_session, session_cookie_from_headers,
};
