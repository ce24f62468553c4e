use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, header::HOST},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::backend::HttpChatBackend;
use crate::config::{AppConfig, ServerConfig};
use crate::page::{ChatPage, PageLocation};
use crate::ui::{render_chat_panel, render_document};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "backend.config.loaded",
        local_url = %config.backend.local_url,
        production_url = %config.backend.production_url,
        public_url = %config.server.public_url,
        "Chat backend configuration loaded"
    );

    let state = AppState {
        config: Arc::clone(&config),
        backend: Arc::new(HttpChatBackend::new()),
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(page_handler).post(submit_handler))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body posted by the chat form.
#[derive(Debug, Deserialize)]
struct SubmitForm {
    /// Draft message, untrimmed.
    #[serde(default)]
    message: String,
}

/// GET / - Render an empty chat page.
async fn page_handler() -> Html<String> {
    Html(render_document(&Default::default()))
}

/// POST / - Submit the draft and render the resulting state.
///
/// Fragment requests get the swappable panel, plain form posts the full page.
async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    let location = page_location(&headers, &state.config.server);
    tracing::debug!(
        hostname = %location.hostname,
        message_length = form.message.len(),
        "Received chat form submission"
    );

    let mut page = ChatPage::new(
        Arc::clone(&state.backend),
        state.config.backend.clone(),
        location,
    )
    .with_draft(form.message);
    page.submit().await;

    let snapshot = page.state();
    if is_fragment_request(&headers) {
        Html(render_chat_panel(&snapshot))
    } else {
        Html(render_document(&snapshot))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Request header asking for the panel fragment; the name HTMX uses.
const FRAGMENT_REQUEST_HEADER: &str = "hx-request";

/// Hostname from the last `Host` header; origin from server configuration.
fn page_location(headers: &HeaderMap, server: &ServerConfig) -> PageLocation {
    let origin = match server.origin() {
        Ok(origin) => Some(origin),
        Err(e) => {
            warn!(
                name: "server.origin.invalid",
                public_url = %server.public_url,
                error = %e,
                "Invalid public URL; same-origin requests are disabled"
            );
            None
        }
    };
    let host = headers
        .get_all(HOST)
        .iter()
        .next_back()
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    PageLocation::from_host(host, origin)
}

fn is_fragment_request(headers: &HeaderMap) -> bool {
    headers
        .get(FRAGMENT_REQUEST_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
