//! Chat page components.
//!
//! [`ChatPanel`] is the unit swapped in after each submission; everything
//! it shows is derived from a [`ChatState`](crate::page::ChatState) snapshot.

mod form;
mod panel;
mod status;

pub use form::ChatForm;
pub use panel::{CHAT_PANEL_ID, ChatPanel};
pub use status::{ErrorPanel, LOADING_INDICATOR_ID, LoadingIndicator, ReplyPanel};
