use confique::Config;

/// Configuration for the LINE WORKS platform connection
#[derive(Debug, Config, Clone, Default)]
pub struct LineWorksConfig {
    /// OAuth client id issued by the developer console
    #[config(env = "RELAY_LINEWORKS_CLIENT_ID")]
    pub client_id: String,

    /// OAuth client secret paired with the client id
    #[config(env = "RELAY_LINEWORKS_CLIENT_SECRET")]
    pub client_secret: String,

    /// Service account the assertion is issued for (the `sub` claim)
    #[config(env = "RELAY_LINEWORKS_SERVICE_ACCOUNT")]
    pub service_account: String,

    /// RSA private key material, PEM or single-line base64 PKCS#8 DER
    #[config(env = "RELAY_LINEWORKS_PRIVATE_KEY")]
    pub private_key: String,

    /// Bot id replies are sent from
    #[config(env = "RELAY_LINEWORKS_BOT_ID")]
    pub bot_id: String,

    /// Shared secret for webhook signature verification
    #[config(env = "RELAY_LINEWORKS_BOT_SECRET")]
    pub bot_secret: String,

    /// Identity endpoint base URL (default: https://auth.worksmobile.com)
    #[config(
        env = "RELAY_LINEWORKS_AUTH_URL",
        default = "https://auth.worksmobile.com"
    )]
    pub auth_url: String,

    /// Messaging API base URL (default: https://www.worksapis.com)
    #[config(
        env = "RELAY_LINEWORKS_API_URL",
        default = "https://www.worksapis.com"
    )]
    pub api_url: String,

    /// Timeout for platform HTTP requests in seconds (default: 10)
    #[config(env = "RELAY_LINEWORKS_HTTP_TIMEOUT", default = 10)]
    pub http_timeout: u64,
}
