//! The chat page: four transient state fields and the submit handler.
//!
//! State lives in a [`tokio::sync::watch`] channel so renderers can observe
//! every transition. The loading state is published before the request is
//! issued, and the terminal state (reply or error, loading cleared) after it
//! resolves.

mod state;

pub use state::{ChatState, PageLocation, SubmitOutcome};

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::backend::{BaseUrl, ChatBackend, ChatError, ChatRequest};
use crate::config::BackendConfig;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_TEXT: &str = "Failed to get response";

/// A single chat page instance.
///
/// Dropping the page (or a pending [`ChatPage::submit`] future) abandons any
/// in-flight request; no late response can reach the state afterwards.
#[derive(Debug)]
pub struct ChatPage {
    backend: Arc<dyn ChatBackend>,
    config: BackendConfig,
    location: PageLocation,
    state: watch::Sender<ChatState>,
}

impl ChatPage {
    #[must_use]
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        config: BackendConfig,
        location: PageLocation,
    ) -> Self {
        let (state, _) = watch::channel(ChatState::default());
        Self {
            backend,
            config,
            location,
            state,
        }
    }

    /// Start with a pre-filled draft.
    #[must_use]
    pub fn with_draft(mut self, draft: impl Into<String>) -> Self {
        self.set_draft(draft);
        self
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ChatState {
        self.state.borrow().clone()
    }

    /// Observe state transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    /// Keystroke handler.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        let draft = draft.into();
        self.state.send_modify(|s| s.draft_message = draft);
    }

    /// Submit the current draft.
    ///
    /// A blank draft is ignored without touching the state. Otherwise exactly
    /// one request is made and exactly one of `reply_text`/`error_text` is set;
    /// `is_loading` is false again when this returns or is dropped.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let draft = self.state.borrow().draft_message.clone();
        if draft.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error_text.clear();
            s.reply_text.clear();
        });
        let _loading = LoadingGuard(&self.state);

        match self.exchange(&draft).await {
            Ok(reply) => {
                info!(
                    name: "chat.submit.replied",
                    reply_length = reply.len(),
                    "Chat reply received"
                );
                self.state.send_modify(|s| {
                    s.reply_text.clone_from(&reply);
                    s.draft_message.clear();
                });
                SubmitOutcome::Replied(reply)
            }
            Err(err) => {
                let text = self.error_text_for(&err);
                warn!(
                    name: "chat.submit.failed",
                    status = ?err.status(),
                    error = %text,
                    "Chat submission failed"
                );
                self.state.send_modify(|s| s.error_text.clone_from(&text));
                SubmitOutcome::Failed(text)
            }
        }
    }

    async fn exchange(&self, draft: &str) -> Result<String, ChatError> {
        let message = draft.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let base = BaseUrl::resolve(&self.location.hostname, &self.config);
        let endpoint = base.chat_endpoint(self.location.origin.as_ref())?;
        info!(
            name: "chat.submit.started",
            endpoint = %endpoint,
            hostname = %self.location.hostname,
            "Submitting chat message"
        );

        let reply = self
            .backend
            .send(&endpoint, &ChatRequest::new(message))
            .await?;
        Ok(reply.text())
    }

    /// Text shown in the error panel for `err`.
    #[must_use]
    pub fn error_text_for(&self, err: &ChatError) -> String {
        if let ChatError::Unreachable(_) = err {
            return format!(
                "Cannot connect to backend. Make sure the backend server is running on {}",
                self.config.local_url
            );
        }
        let text = err.to_string();
        if text.trim().is_empty() {
            GENERIC_FAILURE_TEXT.to_string()
        } else {
            text
        }
    }
}

/// Clears `is_loading` on every exit path, including cancellation.
struct LoadingGuard<'a>(&'a watch::Sender<ChatState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|s| s.is_loading = false);
    }
}
