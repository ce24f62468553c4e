//! Chat panel layout.

use leptos::prelude::*;

use super::{ChatForm, ErrorPanel, LoadingIndicator, ReplyPanel};
use crate::page::ChatState;
use crate::ui::components::SparklesIcon;

/// DOM id of the swappable panel.
pub const CHAT_PANEL_ID: &str = "chat-page";

/// The whole chat page body for one state snapshot:
/// - Header
/// - Message form
/// - Error panel, if the last submission failed
/// - Reply panel, if the last submission succeeded
/// - Loading indicator
#[component]
pub fn ChatPanel(state: ChatState) -> impl IntoView {
    let ChatState {
        draft_message,
        reply_text,
        is_loading,
        error_text,
    } = state;

    let error = (!error_text.is_empty()).then(|| view! { <ErrorPanel message=error_text /> });
    let reply = (!reply_text.is_empty()).then(|| view! { <ReplyPanel reply=reply_text /> });

    view! {
        <div id=CHAT_PANEL_ID class="w-full max-w-3xl space-y-6">
            <div class="text-center space-y-2">
                <h1 class="flex items-center justify-center gap-3 text-4xl font-bold text-white">
                    <SparklesIcon class="h-8 w-8 text-blue-500" />
                    "AI Chat Assistant"
                </h1>
                <p class="text-gray-400">"Powered by Giorgiet"</p>
            </div>

            <ChatForm draft=draft_message loading=is_loading />

            {error}
            {reply}

            <LoadingIndicator active=is_loading />
        </div>
    }
}
