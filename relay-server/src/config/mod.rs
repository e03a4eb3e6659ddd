use crate::config::lineworks::LineWorksConfig;
use confique::Config;

pub mod lineworks;

/// Main configuration structure for the relay server
#[derive(Debug, Config, Clone, Default)]
pub struct RelayConfig {
    /// Port for the relay server to listen on
    #[config(env = "RELAY_PORT", default = 7700)]
    pub port: u16,

    /// LINE WORKS platform settings
    #[config(nested)]
    pub lineworks: LineWorksConfig,
}

impl RelayConfig {
    /// Loads the configuration from environment variables.
    pub fn new() -> Result<Self, confique::Error> {
        Self::builder().env().load()
    }

    /// Builds a configuration wired against mock servers for tests.
    #[cfg(test)]
    pub fn for_test_with_mocks(
        auth_mock: &wiremock::MockServer,
        works_mock: &wiremock::MockServer,
    ) -> Self {
        use crate::test_utils::TEST_RSA_PRIVATE_PEM;

        Self {
            port: 0,
            lineworks: LineWorksConfig {
                client_id: "test-client-id".to_string(),
                client_secret: "test-client-secret".to_string(),
                service_account: "bot@test-domain".to_string(),
                private_key: TEST_RSA_PRIVATE_PEM.to_string(),
                bot_id: "B1".to_string(),
                bot_secret: "test-bot-secret".to_string(),
                auth_url: auth_mock.uri(),
                api_url: works_mock.uri(),
                http_timeout: 5,
            },
        }
    }
}
