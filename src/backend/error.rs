//! Failure taxonomy for a single chat exchange.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use super::types::is_truthy;

/// Why a submission produced no reply.
#[derive(Error, Debug)]
pub enum ChatError {
    /// The draft was blank once trimmed.
    #[error("Please enter a message")]
    EmptyMessage,

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Text derived by [`describe_failure`].
        message: String,
    },

    /// No connection could be made to the backend.
    #[error("{0}")]
    Unreachable(#[source] reqwest::Error),

    /// The exchange failed after connecting, or the reply could not be decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL does not form a valid endpoint.
    #[error("Invalid backend URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Same-origin requests were selected but the page origin is unknown.
    #[error("No backend URL configured and the page origin is unknown")]
    MissingOrigin,
}

impl ChatError {
    /// Classify a `reqwest` send failure.
    #[must_use]
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Unreachable(err)
        } else {
            Self::Transport(err)
        }
    }

    /// HTTP status, when the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Derive display text from a non-2xx response.
///
/// Precedence: an `errors` array joined with `". "`; a `detail` array whose
/// items map to their `msg` (or their JSON) joined with `". "`; any other
/// truthy `detail`; otherwise `HTTP error! status: <code>`. A body that is not
/// JSON (or is `null`) yields the status reason phrase, falling back to the
/// generic status message.
#[must_use]
pub fn describe_failure(status: StatusCode, body: &[u8]) -> String {
    let generic = format!("HTTP error! status: {}", status.as_u16());

    let value = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) | Err(_) => {
            return status
                .canonical_reason()
                .filter(|reason| !reason.is_empty())
                .map_or(generic, str::to_string);
        }
        Ok(value) => value,
    };

    if let Some(errors) = value.get("errors").and_then(Value::as_array) {
        return join_items(errors.iter().map(display_value));
    }

    match value.get("detail") {
        Some(Value::Array(details)) => join_items(details.iter().map(|detail| {
            match detail.get("msg") {
                Some(msg) if is_truthy(msg) => display_value(msg),
                _ => detail.to_string(),
            }
        })),
        Some(detail) if is_truthy(detail) => display_value(detail),
        _ => generic,
    }
}

fn join_items(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(". ")
}

/// Strings verbatim, `null` as empty, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
