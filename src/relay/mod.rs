//! Submission relay: HTTP client, chat message composition and relay server

mod client;
mod message;
mod server;
mod traits;

use serde::{Deserialize, Serialize};

pub use client::{RelayClient, DEFAULT_RELAY_URL};
pub use message::{compose_chat_message, RelayFirm};
pub use server::{router, RelayError, RelayState, SUBMIT_PATH};
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;

/// Body the relay returns on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayAck {
    pub success: bool,
    pub message: String,
}

/// Body the relay returns on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
