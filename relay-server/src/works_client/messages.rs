use crate::auth::token::AccessToken;
use crate::models::OutboundMessage;
use http::header::CONTENT_TYPE;
use http::StatusCode;
use log::{debug, error};
use reqwest::Client;
use thiserror::Error;

/// Errors that can occur while dispatching a message to the platform
#[derive(Debug, Error)]
pub enum SendError {
    /// The messaging API could not be reached (DNS, connect, timeout)
    #[error("Failed to reach messaging API: {0}")]
    Network(#[source] reqwest::Error),
    /// The messaging API answered with a non-success status
    #[error("Messaging API rejected the send with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    /// The outbound message failed to encode
    #[error("Failed to serialize outbound message: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Client for the platform's bot messaging API.
#[derive(Clone)]
pub struct MessagesClient {
    client: Client,
    api_url: String,
}

impl MessagesClient {
    /// Creates a new messaging client against the given API base URL.
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Sends a message from the bot to a user.
    pub async fn send_message(
        &self,
        bot_id: &str,
        user_id: &str,
        token: &AccessToken,
        message: &OutboundMessage,
    ) -> Result<(), SendError> {
        let url = format!(
            "{}/v1.0/bots/{}/users/{}/messages",
            self.api_url, bot_id, user_id
        );
        debug!("Dispatching message to {}", url);

        let body = serde_json::to_vec(message)?;
        let response = self
            .client
            .post(&url)
            .bearer_auth(token.value())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(SendError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Message send rejected with status {}: {}", status, body);
            return Err(SendError::Rejected { status, body });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_builds_exact_path_and_headers() {
        let mock = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/v1.0/bots/B1/users/U1/messages"))
            .and(matchers::header("authorization", "Bearer tok123"))
            .and(matchers::header("content-type", "application/json"))
            .and(matchers::body_json(json!({
                "content": { "type": "text", "text": "hello" }
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock)
            .await;

        let client = MessagesClient::new(Client::new(), mock.uri());
        let token = AccessToken::new("tok123");
        client
            .send_message("B1", "U1", &token, &OutboundMessage::text("hello"))
            .await
            .expect("Send should succeed");

        mock.verify().await;
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_body() {
        let mock = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/v1.0/bots/B1/users/U1/messages"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"code": "SERVER_ERROR"})),
            )
            .expect(1)
            .mount(&mock)
            .await;

        let client = MessagesClient::new(Client::new(), mock.uri());
        let token = AccessToken::new("tok123");
        let err = client
            .send_message("B1", "U1", &token, &OutboundMessage::text("hello"))
            .await
            .expect_err("Send should be rejected");

        match err {
            SendError::Rejected { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, r#"{"code":"SERVER_ERROR"}"#);
            }
            other => panic!("Expected Rejected, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_api_is_network_error() {
        let client = MessagesClient::new(Client::new(), "http://127.0.0.1:1");
        let token = AccessToken::new("tok123");

        let err = client
            .send_message("B1", "U1", &token, &OutboundMessage::text("hello"))
            .await
            .expect_err("Send should fail to connect");
        assert!(matches!(err, SendError::Network(_)));
    }
}
