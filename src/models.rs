// Request/response types for the moderation endpoint.
//
// ModerationRequest is never deserialized straight from the wire with serde.
// Bodies go through `from_json`, which reports exactly which field is missing
// or mistyped so the HTTP layer can answer with a precise client error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Status string reported by `GET /health`.
pub const HEALTH_STATUS: &str = "AI Model Loaded";

/// Model name reported by `GET /health`.
pub const HEALTH_MODEL: &str = "Mock-Transformer";

/// A single piece of chat text to moderate, tagged with its sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationRequest {
    pub text: String,
    pub user_id: String,
}

/// The verdict returned for a moderation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    pub is_toxic: bool,
    /// 0.95 when toxic, 0.0 otherwise
    pub confidence: f64,
    pub original_text: String,
    /// Either `original_text` unchanged, or a same-length run of '*'
    pub filtered_text: String,
}

/// Static health report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub model: String,
}

impl Default for HealthReport {
    fn default() -> Self {
        Self {
            status: HEALTH_STATUS.to_string(),
            model: HEALTH_MODEL.to_string(),
        }
    }
}

/// Why a request body was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("request body is not valid JSON: {0}")]
    Malformed(String),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` must be a string")]
    WrongType { field: &'static str },
}

impl ValidationError {
    /// The offending field, if the error is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField { field } | ValidationError::WrongType { field } => {
                Some(*field)
            }
            ValidationError::Malformed(_) | ValidationError::NotAnObject => None,
        }
    }
}

impl ModerationRequest {
    /// Parse and validate a raw request body.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Validate an already-parsed JSON value. Unknown fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;
        let text = required_string(obj, "text")?;
        let user_id = required_string(obj, "user_id")?;
        Ok(Self { text, user_id })
    }
}

// `null` counts as present-but-wrong-type, not missing.
fn required_string(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_request() {
        let req = ModerationRequest::from_json(br#"{"text":"hello","user_id":"u1"}"#).unwrap();
        assert_eq!(req.text, "hello");
        assert_eq!(req.user_id, "u1");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let req = ModerationRequest::from_value(&json!({
            "text": "hi",
            "user_id": "u1",
            "room_id": "general",
        }))
        .unwrap();
        assert_eq!(req.text, "hi");
    }

    #[test]
    fn test_empty_text_is_valid() {
        let req = ModerationRequest::from_value(&json!({ "text": "", "user_id": "" })).unwrap();
        assert_eq!(req.text, "");
    }

    #[test]
    fn test_missing_text_reported_first() {
        let err = ModerationRequest::from_value(&json!({})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "text" });
        assert_eq!(err.field(), Some("text"));
    }

    #[test]
    fn test_missing_user_id() {
        let err = ModerationRequest::from_value(&json!({ "text": "hi" })).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "user_id" });
    }

    #[test]
    fn test_null_and_number_are_wrong_type() {
        let err = ModerationRequest::from_value(&json!({ "text": null, "user_id": "u" }))
            .unwrap_err();
        assert_eq!(err, ValidationError::WrongType { field: "text" });

        let err = ModerationRequest::from_value(&json!({ "text": "hi", "user_id": 42 }))
            .unwrap_err();
        assert_eq!(err, ValidationError::WrongType { field: "user_id" });
    }

    #[test]
    fn test_non_object_and_garbage() {
        assert_eq!(
            ModerationRequest::from_json(b"[1,2]").unwrap_err(),
            ValidationError::NotAnObject
        );
        let err = ModerationRequest::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_result_serializes_with_wire_names() {
        let result = ModerationResult {
            is_toxic: false,
            confidence: 0.0,
            original_text: "ok".to_string(),
            filtered_text: "ok".to_string(),
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(
            v,
            json!({
                "is_toxic": false,
                "confidence": 0.0,
                "original_text": "ok",
                "filtered_text": "ok",
            })
        );
    }
}
