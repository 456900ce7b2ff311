use serde::Deserialize;

use crate::provider::errors::AuthError;
use crate::provider::types::ProviderSession;
use crate::session::SessionRecord;
use crate::utils::base64url_decode;

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    #[serde(rename = "cognito:username")]
    username: Option<String>,
    sub: Option<String>,
    /// Custom provider attributes are strings on the wire, even booleans.
    #[serde(rename = "custom:admin")]
    admin: Option<String>,
}

/// Build the cookie-borne session record from a provider token response.
///
/// The ID token payload is decoded without signature verification: it was
/// received directly from the provider over TLS, never from the client.
pub fn extract_user_from_session(session: &ProviderSession) -> Result<SessionRecord, AuthError> {
    let claims = decode_claims(&session.id_token)?;

    let name = claims
        .username
        .ok_or_else(|| AuthError::IdToken("Missing cognito:username claim".to_string()))?;

    Ok(SessionRecord {
        name,
        cognito_id: claims.sub,
        admin: claims.admin.map(|v| v == "true"),
        access_token_expires: session.access_token_expires,
        refresh_token: session.refresh_token.clone(),
    })
}

fn decode_claims(id_token: &str) -> Result<IdTokenClaims, AuthError> {
    let mut parts = id_token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next()) {
        (Some(_header), Some(payload), Some(_signature)) => payload,
        _ => return Err(AuthError::IdToken("Invalid token format".to_string())),
    };

    let decoded = base64url_decode(payload)?;
    serde_json::from_slice(&decoded).map_err(|e| AuthError::IdToken(e.to_string()))
}
