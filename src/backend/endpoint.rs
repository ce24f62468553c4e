//! Base URL resolution.

use url::Url;

use super::ChatError;
use crate::config::BackendConfig;

/// Path of the chat operation, relative to the base URL.
pub const CHAT_PATH: &str = "/api/chat";

/// Where the backend lives, as seen from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrl {
    /// An explicit base such as `http://localhost:8000`.
    Absolute(String),
    /// Relative requests against the page's own origin.
    SameOrigin,
}

impl BaseUrl {
    /// Pick the base for a page served under `hostname`.
    ///
    /// `localhost` always talks to the local development endpoint; anything
    /// else uses the production URL, or the page's own origin when none is
    /// configured.
    #[must_use]
    pub fn resolve(hostname: &str, config: &BackendConfig) -> Self {
        if hostname == "localhost" {
            Self::Absolute(config.local_url.clone())
        } else if config.production_url.trim().is_empty() {
            Self::SameOrigin
        } else {
            Self::Absolute(config.production_url.clone())
        }
    }

    /// Full URL of `POST /api/chat`.
    ///
    /// `origin` is only consulted for [`BaseUrl::SameOrigin`].
    pub fn chat_endpoint(&self, origin: Option<&Url>) -> Result<Url, ChatError> {
        match self {
            Self::Absolute(base) => {
                let base = base.trim().trim_end_matches('/');
                Ok(Url::parse(&format!("{base}{CHAT_PATH}"))?)
            }
            Self::SameOrigin => {
                let origin = origin.ok_or(ChatError::MissingOrigin)?;
                Ok(origin.join(CHAT_PATH)?)
            }
        }
    }
}
