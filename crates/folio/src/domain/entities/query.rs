//! Query - One incoming chat message

use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::DomainError;

/// Free text sent by the chat widget. Lives for a single request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build from a `{ "message": string }` payload
    pub fn from_json(payload: &Value) -> Result<Self, DomainError> {
        let object = payload
            .as_object()
            .ok_or_else(|| DomainError::validation("Request body must be a JSON object"))?;

        match object.get("message") {
            Some(Value::String(text)) => Ok(Self::new(text.as_str())),
            Some(Value::Null) | None => Err(DomainError::validation("message is required")),
            Some(_) => Err(DomainError::validation("message must be a string")),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_message_accepted() {
        let query = Query::from_json(&json!({ "message": "hello" })).unwrap();
        assert_eq!(query.text(), "hello");
    }

    #[test]
    fn test_empty_string_is_valid() {
        assert!(Query::from_json(&json!({ "message": "" })).is_ok());
    }

    #[test]
    fn test_invalid_payloads() {
        for payload in [
            json!({ "message": 123 }),
            json!({}),
            json!({ "message": null }),
            json!({ "message": ["a"] }),
            json!("just a string"),
        ] {
            let err = Query::from_json(&payload).unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(_)),
                "{payload} should be rejected"
            );
        }
    }
}
