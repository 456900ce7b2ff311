mod codec;
mod cookie;
mod guard;

pub use codec::{decode_session, encode_session};
pub use cookie::session_cookie_from_headers;
pub use guard::{SessionState, resolve_session};

pub(crate) use cookie::{clear_session_cookie, set_session_cookie};
