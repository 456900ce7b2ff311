use thiserror::Error;

use crate::utils::UtilError;

/// Failures from the identity provider or while interpreting its answers.
///
/// `NotAuthorized` and `Provider` display the provider's message verbatim;
/// the login form surfaces it to the user unchanged.
#[derive(Debug, Error, Clone)]
pub enum AuthError {
    /// Credentials or refresh token rejected by the provider. Drives the
    /// password-reset affordance on the login form.
    #[error("{0}")]
    NotAuthorized(String),

    /// Transport failure or timeout before the provider answered.
    #[error("Network error: {0}")]
    Network(String),

    /// Any other provider-side failure.
    #[error("{0}")]
    Provider(String),

    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Id token error: {0}")]
    IdToken(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
