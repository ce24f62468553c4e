use url::Url;

/// Transient page state, discarded with the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    /// In-progress input text.
    pub draft_message: String,
    /// Text of the last reply.
    pub reply_text: String,
    /// True while a request is outstanding.
    pub is_loading: bool,
    /// Text of the last failure.
    pub error_text: String,
}

impl ChatState {
    /// Whether the send button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.draft_message.trim().is_empty()
    }
}

/// Where the page is being viewed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Hostname without port, e.g. `localhost`.
    pub hostname: String,
    /// Page origin, needed for same-origin backend requests.
    pub origin: Option<Url>,
}

impl PageLocation {
    #[must_use]
    pub fn new(hostname: impl Into<String>, origin: Option<Url>) -> Self {
        Self {
            hostname: hostname.into(),
            origin,
        }
    }

    /// Take the hostname from a `Host` header value.
    ///
    /// The header only selects between the local and production endpoints;
    /// the origin for same-origin requests is supplied by the server. An
    /// invalid authority yields an empty hostname.
    #[must_use]
    pub fn from_host(host: &str, origin: Option<Url>) -> Self {
        let hostname = Url::parse(&format!("http://{host}/"))
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default();
        Self { hostname, origin }
    }
}

/// Result of one submit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank draft; nothing was sent.
    Ignored,
    /// The backend replied with this text.
    Replied(String),
    /// The submission failed with this display text.
    Failed(String),
}
