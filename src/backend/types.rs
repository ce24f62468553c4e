//! Wire types for `POST /api/chat`.

use serde::Serialize;
use serde_json::Value;

/// Shown when a successful reply carries no usable `reply` field.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received";

/// Request body: `{ "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// The trimmed, non-empty user message.
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Decoded success body.
///
/// Kept as raw JSON so that bodies without `reply`, or which are not even
/// objects, still count as successes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    body: Value,
}

impl ChatReply {
    #[must_use]
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Convenience constructor for `{ "reply": text }`.
    #[must_use]
    pub fn text_reply(text: impl Into<String>) -> Self {
        Self::new(serde_json::json!({ "reply": text.into() }))
    }

    /// Text to display for this reply.
    ///
    /// Falsy `reply` values (missing, `null`, `""`, `false`, `0`) display the
    /// placeholder. Other non-string values display as JSON.
    #[must_use]
    pub fn text(&self) -> String {
        match self.body.get("reply") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(value) if is_truthy(value) => value.to_string(),
            _ => NO_RESPONSE_PLACEHOLDER.to_string(),
        }
    }
}

/// JavaScript-style truthiness, which is what backends written against the
/// browser client expect.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
