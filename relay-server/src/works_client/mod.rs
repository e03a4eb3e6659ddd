//! Clients for the platform's outbound HTTP surfaces: the identity
//! endpoint's JWT-bearer token exchange and the bot messaging API.
//!
//! Both clients share the process-wide `reqwest::Client` built once at
//! startup and report failures as typed errors so the callback orchestrator
//! can tell an unreachable platform from a rejection.

pub mod messages;
pub mod token;
