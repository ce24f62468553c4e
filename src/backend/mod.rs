//! Chat Backend client.
//!
//! The backend is an external HTTP service exposing a single operation,
//! `POST {base}/api/chat`. This module owns everything on the wire side of
//! that contract:
//!
//! - [`BaseUrl`]: picks the backend base for the page's hostname
//! - [`ChatRequest`] / [`ChatReply`]: request body and decoded success body
//! - [`ChatError`] and [`describe_failure`]: failure taxonomy and the
//!   human-readable text derived from non-2xx bodies
//! - [`ChatBackend`]: the seam the page talks through, with
//!   [`HttpChatBackend`] as the `reqwest` implementation

pub mod endpoint;
pub mod error;
pub mod http;
pub mod types;

pub use endpoint::BaseUrl;
pub use error::{ChatError, describe_failure};
pub use http::HttpChatBackend;
pub use types::{ChatReply, ChatRequest, NO_RESPONSE_PLACEHOLDER};

use async_trait::async_trait;
use url::Url;

/// Transport to the Chat Backend.
///
/// One call is one attempt: implementations must not retry.
#[async_trait]
pub trait ChatBackend: Send + Sync + std::fmt::Debug {
    /// Send `request` to `endpoint` and decode the reply.
    async fn send(&self, endpoint: &Url, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}
