use crate::auth::token::AccessToken;
use http::StatusCode;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Grant type of the signed-assertion exchange (RFC 7523).
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Scope covering bot messaging.
const BOT_SCOPE: &str = "bot";
/// Token endpoint path under the identity host.
const TOKEN_PATH: &str = "/oauth2/v2.0/token";

/// Errors that can occur while exchanging an assertion for an access token
#[derive(Debug, Error)]
pub enum TokenExchangeError {
    /// The identity endpoint could not be reached (DNS, connect, timeout)
    #[error("Failed to reach token endpoint: {0}")]
    Network(#[source] reqwest::Error),
    /// The identity endpoint answered with a non-success status
    #[error("Token endpoint rejected the exchange with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    /// The identity endpoint answered 2xx with an undecodable body
    #[error("Failed to parse token response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Success body of the token endpoint, everything beyond the token ignored.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the identity endpoint's JWT-bearer grant.
#[derive(Clone)]
pub struct TokenClient {
    client: Client,
    auth_url: String,
    client_id: String,
    client_secret: String,
}

impl TokenClient {
    /// Creates a new token client against the given identity base URL.
    pub fn new(
        client: Client,
        auth_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let auth_url = auth_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            auth_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Exchanges a signed assertion for a bearer access token.
    ///
    /// No retry happens here; a failed exchange surfaces to the caller as a
    /// typed error distinguishing an unreachable endpoint from a rejection.
    pub async fn exchange(&self, assertion: &str) -> Result<AccessToken, TokenExchangeError> {
        let url = format!("{}{}", self.auth_url, TOKEN_PATH);
        debug!("Requesting access token from {}", url);

        let form = [
            ("assertion", assertion),
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", BOT_SCOPE),
        ];

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(TokenExchangeError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Token exchange rejected with status {}: {}", status, body);
            return Err(TokenExchangeError::Rejected { status, body });
        }

        let body = response.bytes().await.map_err(TokenExchangeError::Network)?;
        let token_response: TokenResponse = serde_json::from_slice(&body)?;
        Ok(AccessToken::new(token_response.access_token))
    }
}
