//! Message form.

use leptos::prelude::*;

use super::{CHAT_PANEL_ID, LOADING_INDICATOR_ID};
use crate::ui::components::{Button, Input, SendIcon};

/// Draft input and send button.
///
/// Works as a plain `POST /` form; `static/app.js` upgrades it to a background
/// post that disables its controls while the request is in flight and swaps
/// the returned panel into `data-target`. Blank drafts are stopped by the
/// input's `required`/`pattern` validation.
#[component]
pub fn ChatForm(
    /// Current draft.
    draft: String,
    /// Whether a request is outstanding.
    loading: bool,
) -> impl IntoView {
    let target = format!("#{CHAT_PANEL_ID}");
    let indicator = format!("#{LOADING_INDICATOR_ID}");
    let label = if loading { "Sending..." } else { "Send" };

    view! {
        <form
            method="post"
            action="/"
            class="space-y-4"
            data-chat-form=""
            data-target=target
            data-indicator=indicator
        >
            <div class="flex gap-3">
                <Input
                    name="message"
                    id="message"
                    placeholder="Type your message here..."
                    value=draft
                    disabled=loading
                    non_blank=true
                />
                <Button button_type="submit" disabled=loading>
                    <SendIcon class="h-4 w-4" />
                    <span data-label="">{label}</span>
                </Button>
            </div>
        </form>
    }
}
