//! Incoming chat message body and its validation.

use serde::Deserialize;
use serde_json::Value;

use crate::error::WellnessError;

/// Error text returned when the message field is unusable.
pub const INVALID_MESSAGE: &str = "Valid message required";

/// Raw `{ "message": ... }` request body.
///
/// `message` is kept untyped so that a missing or non-string value is a
/// validation failure rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl MessageBody {
    /// Extract the message text.
    ///
    /// Absent, `null`, non-string and empty-string values are all rejected.
    pub fn into_text(self) -> Result<String, WellnessError> {
        match self.message {
            Some(Value::String(text)) if !text.is_empty() => Ok(text),
            _ => Err(WellnessError::Validation(INVALID_MESSAGE.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MessageBody {
        serde_json::from_str(json).expect("parse body")
    }

    #[test]
    fn accepts_non_empty_string() {
        let text = parse(r#"{"message":"I feel tired"}"#).into_text().unwrap();
        assert_eq!(text, "I feel tired");
    }

    #[test]
    fn rejects_missing_message() {
        let err = parse("{}").into_text().unwrap_err();
        assert!(matches!(err, WellnessError::Validation(m) if m == INVALID_MESSAGE));
    }

    #[test]
    fn rejects_numeric_message() {
        let err = parse(r#"{"message":42}"#).into_text().unwrap_err();
        assert!(matches!(err, WellnessError::Validation(_)));
    }

    #[test]
    fn rejects_null_and_empty() {
        assert!(parse(r#"{"message":null}"#).into_text().is_err());
        assert!(parse(r#"{"message":""}"#).into_text().is_err());
    }

    #[test]
    fn ignores_unknown_fields() {
        let text = parse(r#"{"message":"hi","extra":true}"#).into_text().unwrap();
        assert_eq!(text, "hi");
    }
}
