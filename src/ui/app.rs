//! Document shell and render entry points.

use leptos::prelude::*;

use crate::page::ChatState;
use crate::ui::chat::ChatPanel;

/// Page title, also used as the document heading.
pub const PAGE_TITLE: &str = "AI Chat Assistant";

/// Stylesheet shipped under `static/`.
pub const STYLESHEET_PATH: &str = "/static/app.css";

/// Form enhancement script shipped under `static/`.
pub const SCRIPT_PATH: &str = "/static/app.js";

const PAGE_DESCRIPTION: &str = "Chat with AI powered by FastAPI and OpenAI";

/// Full HTML document.
#[component]
fn Document(state: ChatState) -> impl IntoView {
    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=PAGE_DESCRIPTION/>

                <title>{PAGE_TITLE}</title>

                // Local assets only (no CDN)
                <link rel="stylesheet" href=STYLESHEET_PATH/>
                <script src=SCRIPT_PATH defer="defer"></script>
            </head>

            <body class="min-h-screen bg-gray-950 text-white antialiased">
                <main class="min-h-screen flex flex-col items-center justify-center p-4">
                    <ChatPanel state=state/>
                </main>
            </body>
        </html>
    }
}

/// Render the complete page for `state`.
#[must_use]
pub fn render_document(state: &ChatState) -> String {
    let state = state.clone();
    let html = Owner::new().with(move || view! { <Document state=state/> }.to_html());
    format!("<!DOCTYPE html>{html}")
}

/// Render only the swappable chat panel for `state`.
#[must_use]
pub fn render_chat_panel(state: &ChatState) -> String {
    let state = state.clone();
    Owner::new().with(move || view! { <ChatPanel state=state/> }.to_html())
}
