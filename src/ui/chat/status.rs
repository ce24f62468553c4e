//! Error, reply and loading panels.

use leptos::prelude::*;

use crate::ui::components::{AlertIcon, Card, CardContent, CardHeader, LoaderIcon};

/// DOM id of the loading indicator, referenced by the form's `data-indicator`.
pub const LOADING_INDICATOR_ID: &str = "chat-loading";

/// Failure text.
#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div
            class="p-4 bg-red-900/30 border border-red-800 rounded-lg text-red-200"
            role="alert"
        >
            <p class="flex items-center gap-2 font-semibold">
                <AlertIcon class="h-4 w-4" />
                "Error:"
            </p>
            <p class="chat-error">{message}</p>
        </div>
    }
}

/// Backend reply, whitespace preserved.
#[component]
pub fn ReplyPanel(reply: String) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <h2 class="text-lg font-semibold text-white">"Response:"</h2>
            </CardHeader>
            <CardContent>
                <p class="chat-reply text-gray-300 whitespace-pre-wrap leading-relaxed">
                    {reply}
                </p>
            </CardContent>
        </Card>
    }
}

/// "Waiting for response..." block.
///
/// Always rendered so the form script can reveal it during a background
/// request; `is-active` is preset when the page itself is in the loading state.
#[component]
pub fn LoadingIndicator(
    /// Whether the page is currently loading.
    active: bool,
) -> impl IntoView {
    let classes = if active {
        "chat-indicator is-active"
    } else {
        "chat-indicator"
    };

    view! {
        <div id=LOADING_INDICATOR_ID class=classes aria-live="polite">
            <Card class="p-6">
                <div class="flex items-center gap-3">
                    <LoaderIcon class="h-5 w-5 text-blue-500" />
                    <p class="text-gray-400">"Waiting for response..."</p>
                </div>
            </Card>
        </div>
    }
}
