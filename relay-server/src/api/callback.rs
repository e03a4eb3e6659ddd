use crate::auth::signature::verify_signature;
use crate::models::{InboundEvent, OutboundMessage};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use log::{debug, error, info, warn};

/// Header carrying the HMAC-SHA256 signature of the raw request body.
pub const SIGNATURE_HEADER: &str = "X-WORKS-Signature";

/// Terminal state of a single callback delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Reply delivered to the sender
    Sent,
    /// Signature missing or failed verification
    Rejected,
    /// Authentic but carried nothing to relay
    Ignored,
    /// Token exchange was refused or unreachable
    ExchangeFailed,
    /// Messaging API refused or was unreachable
    SendFailed,
}

/// Receives bot callbacks from the platform.
///
/// The platform redelivers callbacks that do not get a 2xx answer, so every
/// outcome maps to 200 OK and failures surface in the logs only.
async fn handle_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    let outcome = process_callback(&state, signature, &body).await;
    debug!("Callback processed: {:?}", outcome);

    StatusCode::OK
}

/// Runs one callback through verification, token exchange, and dispatch.
///
/// The body is verified as raw bytes before any parsing happens.
async fn process_callback(
    state: &AppState,
    signature: Option<&str>,
    raw_body: &[u8],
) -> CallbackOutcome {
    let bot_secret = state.config.lineworks.bot_secret.as_bytes();
    if !verify_signature(raw_body, signature, bot_secret) {
        warn!("Rejected callback with missing or invalid signature");
        return CallbackOutcome::Rejected;
    }

    let event: InboundEvent = match serde_json::from_slice(raw_body) {
        Ok(event) => event,
        Err(e) => {
            info!("Ignoring callback with unparseable body: {}", e);
            return CallbackOutcome::Ignored;
        }
    };

    let (user_id, text) = match (event.sender_user_id(), event.message_text()) {
        (Some(user_id), Some(text)) => (user_id, text),
        _ => {
            info!(
                "Ignoring {} event without a sender and message text",
                event.r#type.as_deref().unwrap_or("unknown")
            );
            return CallbackOutcome::Ignored;
        }
    };

    let token = match state.token_provider.access_token().await {
        Ok(token) => token,
        Err(e) => {
            error!("Token exchange failed: {}", e);
            return CallbackOutcome::ExchangeFailed;
        }
    };

    let reply = OutboundMessage::text(text);
    let bot_id = &state.config.lineworks.bot_id;
    match state
        .messages
        .send_message(bot_id, user_id, &token, &reply)
        .await
    {
        Ok(()) => {
            info!("Relayed reply to user {}", user_id);
            CallbackOutcome::Sent
        }
        Err(e) => {
            error!("Message dispatch failed: {}", e);
            CallbackOutcome::SendFailed
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/callback", post(handle_callback))
}
