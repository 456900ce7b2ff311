mod config;
mod errors;
mod main;
mod types;

pub use errors::AuthError;
pub use main::{CognitoClient, IdentityProvider, extract_user_from_session};
pub use types::ProviderSession;
