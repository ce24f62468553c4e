//! AI Chat Assistant Server
//!
//! Entry point: serves the chat page, or sends a single message with `--message`.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::process::ExitCode;
use std::sync::Arc;

use chat_assistant::backend::HttpChatBackend;
use chat_assistant::config::{AppConfig, Cli};
use chat_assistant::page::{ChatPage, PageLocation, SubmitOutcome};
use chat_assistant::server::start_server;
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = match AppConfig::from_cli(&cli) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(message) = cli.message {
        return send_once(&config, &cli.hostname, message).await;
    }

    match start_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

/// One submission from the terminal, as if typed into the page.
async fn send_once(config: &AppConfig, hostname: &str, message: String) -> ExitCode {
    let mut page = ChatPage::new(
        Arc::new(HttpChatBackend::new()),
        config.backend.clone(),
        PageLocation::new(hostname, config.server.origin().ok()),
    )
    .with_draft(message);

    match page.submit().await {
        SubmitOutcome::Replied(reply) => {
            println!("{reply}");
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
        SubmitOutcome::Ignored => {
            eprintln!("Nothing to send: the message is blank");
            ExitCode::FAILURE
        }
    }
}
