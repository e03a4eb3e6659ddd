use crate::auth::assertion::{AssertionError, AssertionSigner};
use crate::auth::token::{FreshTokenProvider, TokenProvider};
use crate::config::RelayConfig;
use crate::works_client::messages::MessagesClient;
use crate::works_client::token::TokenClient;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub token_provider: Arc<dyn TokenProvider>,
    pub messages: Arc<MessagesClient>,
}

impl AppState {
    fn create_platform_client(timeout: u64) -> Client {
        // Create a shared client for the LINE WORKS endpoints
        Client::builder()
            // Set reasonable timeouts
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(2)) // 2 seconds timeout for connections
            // Configure connection pool
            .pool_max_idle_per_host(10) // Keep up to 10 idle connections per host
            .pool_idle_timeout(Some(Duration::from_secs(90))) // Keep idle connections for 90 seconds
            // Build the client
            .build()
            .expect("Failed to create platform client")
    }

    pub fn new(config: RelayConfig) -> Result<Self, AssertionError> {
        let signer = AssertionSigner::new(
            config.lineworks.client_id.clone(),
            config.lineworks.service_account.clone(),
            &config.lineworks.private_key,
        )?;
        let client = Self::create_platform_client(config.lineworks.http_timeout);
        let token_client = TokenClient::new(
            client.clone(),
            config.lineworks.auth_url.clone(),
            config.lineworks.client_id.clone(),
            config.lineworks.client_secret.clone(),
        );
        let messages = MessagesClient::new(client, config.lineworks.api_url.clone());

        Ok(Self {
            config: Arc::new(config),
            token_provider: Arc::new(FreshTokenProvider::new(signer, token_client)),
            messages: Arc::new(messages),
        })
    }

    #[cfg(test)]
    pub fn for_testing(config: &RelayConfig) -> Self {
        Self::new(config.clone()).expect("Failed to create test state")
    }

    /// Replaces the token provider, keeping the shared clients intact.
    #[cfg(test)]
    pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = provider;
        self
    }
}
