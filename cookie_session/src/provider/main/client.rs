use std::collections::HashMap;
use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::provider::config::{PROVIDER_CLIENT_ID, PROVIDER_ENDPOINT, PROVIDER_TIMEOUT};
use crate::provider::errors::AuthError;
use crate::provider::types::{
    AuthenticationResult, InitiateAuthRequest, InitiateAuthResponse, ProviderErrorResponse,
    ProviderSession,
};

/// The external identity provider, treated as a black box performing
/// credential logins and refresh-token exchanges.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<ProviderSession, AuthError>;

    async fn refresh(&self, refresh_token: &str) -> Result<ProviderSession, AuthError>;
}

// Both provider calls can block a request for a full round trip, so the
// client carries a bounded timeout rather than the transport default.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(*PROVIDER_TIMEOUT)
        .build()
        .expect("Failed to create reqwest client")
});

/// Client for the AWS Cognito `InitiateAuth` JSON API.
#[derive(Debug, Clone, Default)]
pub struct CognitoClient;

impl CognitoClient {
    async fn initiate_auth(
        &self,
        auth_flow: &str,
        auth_parameters: HashMap<String, String>,
        supplied_refresh_token: Option<&str>,
    ) -> Result<ProviderSession, AuthError> {
        let request = InitiateAuthRequest {
            auth_flow: auth_flow.to_string(),
            client_id: PROVIDER_CLIENT_ID.to_string(),
            auth_parameters,
        };

        let response = HTTP_CLIENT
            .post(PROVIDER_ENDPOINT.as_str())
            .header(
                "X-Amz-Target",
                "AWSCognitoIdentityProviderService.InitiateAuth",
            )
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!("InitiateAuth {auth_flow} failed with {status}: {body}");
            return Err(decode_provider_error(&body));
        }

        let response: InitiateAuthResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::Serde(e.to_string()))?;

        Ok(session_from_result(
            response.authentication_result,
            supplied_refresh_token,
        ))
    }
}

#[async_trait]
impl IdentityProvider for CognitoClient {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<ProviderSession, AuthError> {
        let params = HashMap::from([
            ("USERNAME".to_string(), username.to_string()),
            ("PASSWORD".to_string(), password.to_string()),
        ]);
        self.initiate_auth("USER_PASSWORD_AUTH", params, None).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<ProviderSession, AuthError> {
        let params = HashMap::from([("REFRESH_TOKEN".to_string(), refresh_token.to_string())]);
        self.initiate_auth("REFRESH_TOKEN_AUTH", params, Some(refresh_token))
            .await
    }
}

fn decode_provider_error(body: &str) -> AuthError {
    match serde_json::from_str::<ProviderErrorResponse>(body) {
        Ok(error) => {
            let message = error
                .message
                .unwrap_or_else(|| "Failed to log in.".to_string());
            // The type may be bare or namespaced, e.g.
            // "com.amazonaws...#NotAuthorizedException"
            if error.error_type.ends_with("NotAuthorizedException") {
                AuthError::NotAuthorized(message)
            } else {
                AuthError::Provider(message)
            }
        }
        Err(_) => AuthError::Provider("Failed to log in.".to_string()),
    }
}

fn session_from_result(
    result: AuthenticationResult,
    supplied_refresh_token: Option<&str>,
) -> ProviderSession {
    // A refresh-token exchange only mints a new refresh token when the
    // provider rotates them; otherwise keep the one we already hold.
    let refresh_token = result
        .refresh_token
        .or_else(|| supplied_refresh_token.map(str::to_string))
        .unwrap_or_default();

    ProviderSession {
        id_token: result.id_token,
        access_token_expires: Utc::now().timestamp() + result.expires_in,
        refresh_token,
    }
}
