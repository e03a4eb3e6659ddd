use crate::auth::assertion::{AssertionError, AssertionSigner};
use crate::works_client::token::{TokenClient, TokenExchangeError};
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Bearer credential for the platform's messaging API.
///
/// The platform states a 24 hour lifetime; this process does not rely on it
/// and treats the token as valid for the call it was obtained for.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    obtained_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            obtained_at: Utc::now(),
        }
    }

    /// Raw bearer value, for Authorization headers only.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// When the token was obtained.
    pub fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }
}

// Keeps the bearer value out of log records and panic messages.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

/// Errors that can occur while acquiring a token through a provider
#[derive(Debug, Error)]
pub enum TokenError {
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    #[error(transparent)]
    Exchange(#[from] TokenExchangeError),
}

/// Source of bearer tokens for outbound platform calls.
///
/// The default wiring requests a fresh token per callback. Embedders that
/// want caching or an externally managed credential implement this trait
/// and hand their provider to the state instead.
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken, TokenError>;
}

/// Signs a fresh assertion and exchanges it on every call.
pub struct FreshTokenProvider {
    signer: AssertionSigner,
    client: TokenClient,
}

impl FreshTokenProvider {
    pub fn new(signer: AssertionSigner, client: TokenClient) -> Self {
        Self { signer, client }
    }
}

#[async_trait::async_trait]
impl TokenProvider for FreshTokenProvider {
    async fn access_token(&self) -> Result<AccessToken, TokenError> {
        let assertion = self.signer.sign()?;
        let token = self.client.exchange(&assertion).await?;
        Ok(token)
    }
}

/// Serves one caller-supplied token on every call.
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

#[async_trait::async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<AccessToken, TokenError> {
        Ok(self.token.clone())
    }
}
