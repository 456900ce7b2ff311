use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tokens returned by the identity provider for a completed credential
/// login or refresh-token exchange.
#[derive(Debug, Clone)]
pub struct ProviderSession {
    /// JWT carrying the user's identity claims.
    pub id_token: String,
    /// Instant the access credential becomes invalid, in epoch seconds.
    pub access_token_expires: i64,
    /// Token for the next silent refresh.
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct InitiateAuthRequest {
    pub(super) auth_flow: String,
    pub(super) client_id: String,
    pub(super) auth_parameters: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct InitiateAuthResponse {
    pub(super) authentication_result: AuthenticationResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct AuthenticationResult {
    pub(super) id_token: String,
    /// Access-token lifetime in seconds from now.
    pub(super) expires_in: i64,
    /// Absent on refresh unless the provider rotates refresh tokens.
    pub(super) refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProviderErrorResponse {
    #[serde(rename = "__type")]
    pub(super) error_type: String,
    #[serde(rename = "message", alias = "Message")]
    pub(super) message: Option<String>,
}
