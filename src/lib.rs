//! AI Chat Assistant
//!
//! A single-page chat client: a text input submits one message to a Chat
//! Backend over HTTP and the page renders the reply, a loading state, or an
//! error.
//!
//! # Architecture
//!
//! - **Server**: Axum serves the page and handles form submissions
//! - **Page**: the four-field page state and its submit handler
//! - **Backend client**: `reqwest` implementation of the `/api/chat` contract
//! - **UI**: Leptos SSR, progressively enhanced by a local script
//!
//! # Modules
//!
//! - [`backend`]: Chat Backend contract and HTTP client
//! - [`config`]: CLI flags and layered configuration
//! - [`page`]: Page state and submit handler
//! - [`server`]: Axum router
//! - [`ui`]: Server-side rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod backend;
pub mod config;
pub mod page;
pub mod server;
pub mod ui;

use crate::backend::ChatBackend;
use crate::config::AppConfig;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Transport to the Chat Backend.
    pub backend: Arc<dyn ChatBackend>,
}
