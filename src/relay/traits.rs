//! Trait abstraction for the submission relay to enable mocking in tests

use crate::state::FirmEntry;
use anyhow::Result;
use async_trait::async_trait;

use super::RelayAck;

/// Receives the finished submission from the advisor form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// Forward the accumulated firms and the submitter's email
    async fn submit(&self, firms: &[FirmEntry], user_email: &str) -> Result<RelayAck>;
}
