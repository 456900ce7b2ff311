use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Cookie value that is present but not a valid session record.
    /// Control flow treats this like an absent cookie; it is only kept
    /// distinct for logging.
    #[error("Malformed session: {0}")]
    MalformedSession(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Header error: {0}")]
    Header(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
