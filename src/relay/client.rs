//! HTTP client for the submission relay

use super::traits::SubmissionClientTrait;
use super::{RelayAck, RelayErrorBody};
use crate::state::FirmEntry;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Default relay endpoint
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:8787/api/submit-form";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest<'a> {
    firms: &'a [FirmEntry],
    user_email: &'a str,
}

/// Posts finished submissions to the relay service
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Client for `FIRM_ADVISOR_RELAY_URL`, or the configured/default URL
    pub fn from_env_or(configured: Option<&str>) -> Self {
        let url = std::env::var("FIRM_ADVISOR_RELAY_URL")
            .ok()
            .or_else(|| configured.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionClientTrait for RelayClient {
    async fn submit(&self, firms: &[FirmEntry], user_email: &str) -> Result<RelayAck> {
        let response = self
            .http
            .post(&self.url)
            .json(&SubmitRequest { firms, user_email })
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach relay at {}: {}", self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<RelayErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(anyhow!("Relay rejected submission ({status}): {reason}"));
        }

        response
            .json::<RelayAck>()
            .await
            .map_err(|e| anyhow!("Invalid relay response: {}", e))
    }
}
