// Moderation scorer trait — the swap-ready abstraction.
//
// The default implementation is the local word-list check. A remote
// implementation talks to another instance of this service.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ModerationRequest, ModerationResult};

/// The outcome of checking one piece of text, before it is paired with the
/// original text into a ModerationResult.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub is_toxic: bool,
    /// 0.95 when toxic, 0.0 otherwise
    pub confidence: f64,
    pub filtered_text: String,
}

impl Classification {
    /// Attach the original text to produce the wire-level result.
    pub fn into_result(self, original_text: &str) -> ModerationResult {
        ModerationResult {
            is_toxic: self.is_toxic,
            confidence: self.confidence,
            original_text: original_text.to_string(),
            filtered_text: self.filtered_text,
        }
    }
}

/// Trait for moderating chat text. Async because remote scorers make HTTP
/// calls; local scorers simply never await.
#[async_trait]
pub trait ModerationScorer: Send + Sync {
    /// Moderate a single request.
    async fn moderate(&self, request: &ModerationRequest) -> Result<ModerationResult>;
}
