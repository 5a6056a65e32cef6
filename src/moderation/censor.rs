// Chat payload censoring.
//
// Applied by the chat backend before a message is broadcast to a room.
// Toxic messages are replaced with a marked, redacted version. If the
// scorer is unreachable the message goes through untouched (fail open).

use tracing::warn;

use super::traits::ModerationScorer;
use crate::models::ModerationRequest;

/// Prefix put in front of redacted text in place of a toxic message.
pub const CENSOR_PREFIX: &str = "[CENSORED BY AI]: ";

/// Return the text that should actually be broadcast for `text`.
pub async fn censor_payload(scorer: &dyn ModerationScorer, text: &str, user_id: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let request = ModerationRequest {
        text: text.to_string(),
        user_id: user_id.to_string(),
    };

    match scorer.moderate(&request).await {
        Ok(result) if result.is_toxic => format!("{CENSOR_PREFIX}{}", result.filtered_text),
        Ok(_) => text.to_string(),
        Err(e) => {
            warn!(error = %e, user_id = %user_id, "Moderation unavailable, passing message through");
            text.to_string()
        }
    }
}
