//! UI components and layouts.
//!
//! Leptos SSR components for the chat page, following ShadCN-UI design
//! principles. A small local script upgrades the form to background
//! submissions; without it the page works as a plain HTML form.
//!
//! # Structure
//!
//! - [`app`]: Document shell and render entry points
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat-specific components

pub mod app;
pub mod chat;
pub mod components;

pub use app::{PAGE_TITLE, SCRIPT_PATH, STYLESHEET_PATH, render_chat_panel, render_document};
