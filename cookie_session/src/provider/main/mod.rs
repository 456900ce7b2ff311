mod client;
mod idtoken;

pub use client::{CognitoClient, IdentityProvider};
pub use idtoken::extract_user_from_session;
