// Word-list moderation — the local, deterministic scorer.
//
// Text is toxic if any disallowed word occurs anywhere in it, ignoring case.
// This is a substring match, not a whole-word match: "badge" contains "bad"
// and is flagged. Toxic text is redacted to a run of '*' with the same
// character count as the input.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::traits::{Classification, ModerationScorer};
use crate::models::{ModerationRequest, ModerationResult};

/// Words that mark a message as toxic. Stored lower-case.
pub const DISALLOWED_WORDS: [&str; 3] = ["spam", "fail", "bad"];

/// Confidence reported for toxic text.
pub const CONFIDENCE_TOXIC: f64 = 0.95;

/// Confidence reported for clean text.
pub const CONFIDENCE_CLEAN: f64 = 0.0;

/// Classify text against the disallowed-word list.
pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();
    let is_toxic = DISALLOWED_WORDS.iter().any(|word| lowered.contains(word));

    if is_toxic {
        Classification {
            is_toxic: true,
            confidence: CONFIDENCE_TOXIC,
            filtered_text: redact(text),
        }
    } else {
        Classification {
            is_toxic: false,
            confidence: CONFIDENCE_CLEAN,
            filtered_text: text.to_string(),
        }
    }
}

/// Replace every character of `text` with '*'.
///
/// Counts characters, not bytes, so "café" becomes four stars.
pub fn redact(text: &str) -> String {
    "*".repeat(text.chars().count())
}

/// ModerationScorer backed by `classify`. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListScorer;

#[async_trait]
impl ModerationScorer for WordListScorer {
    async fn moderate(&self, request: &ModerationRequest) -> Result<ModerationResult> {
        let classification = classify(&request.text);
        debug!(
            user_id = %request.user_id,
            chars = request.text.chars().count(),
            is_toxic = classification.is_toxic,
            "Classified text"
        );
        Ok(classification.into_result(&request.text))
    }
}
