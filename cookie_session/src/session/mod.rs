mod config;
mod errors;
mod main;
mod types;

pub use config::SESSION_COOKIE_NAME; // Required for cookie configuration
pub use errors::SessionError;
pub use main::{
    SessionState, decode_session, encode_session, resolve_session, session_cookie_from_headers,
};
pub use types::SessionRecord;

pub(crate) use main::{clear_session_cookie, set_session_cookie};
