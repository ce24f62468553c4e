//! `reqwest` implementation of [`ChatBackend`].

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::{ChatBackend, ChatError, ChatReply, ChatRequest, describe_failure};

/// Talks to the Chat Backend over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpChatBackend {
    http: reqwest::Client,
}

impl HttpChatBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, endpoint: &Url, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        debug!(
            name: "backend.request.sent",
            endpoint = %endpoint,
            message_length = request.message.len(),
            "Sending chat request"
        );

        let response = self
            .http
            .post(endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(ChatError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body is treated like a non-JSON one.
            let body = response.bytes().await.unwrap_or_default();
            let message = describe_failure(status, &body);
            warn!(
                name: "backend.request.rejected",
                endpoint = %endpoint,
                status = status.as_u16(),
                error = %message,
                "Chat backend returned an error status"
            );
            return Err(ChatError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        debug!(name: "backend.response.received", status = status.as_u16(), "Chat reply received");
        Ok(ChatReply::new(body))
    }
}
