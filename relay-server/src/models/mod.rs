use serde::{Deserialize, Serialize};

/// Callback event delivered by the platform webhook.
///
/// Every field is optional on the wire: message events carry `source` and
/// `content`, while membership/system events omit some or all of them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    /// Event type (e.g. "message", "join", "leave")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Sender information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EventSource>,
    /// Event creation time (yyyy-MM-dd'T'HH:mm:ss.SSSz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_time: Option<String>,
    /// Message payload, present for message events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

/// Sender of an inbound event.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    /// User the event originated from; reply target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Domain the sender belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,
    /// Channel the event was sent in, for channel messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
}

/// Content of an inbound message event.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageContent {
    /// Content type (e.g. "text", "sticker", "image")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Message text, present for text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Message posted back to the platform's messaging API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutboundMessage {
    pub content: TextContent,
}

/// Text payload of an outbound message.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextContent {
    pub r#type: String,
    pub text: String,
}

impl OutboundMessage {
    /// Builds a text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: TextContent {
                r#type: "text".to_string(),
                text: text.into(),
            },
        }
    }
}

impl InboundEvent {
    /// Sender user id, if the event carries one.
    pub fn sender_user_id(&self) -> Option<&str> {
        self.source.as_ref()?.user_id.as_deref()
    }

    /// Message text, if the event is a text message.
    pub fn message_text(&self) -> Option<&str> {
        self.content.as_ref()?.text.as_deref()
    }
}
