//! The page routes, driven through `axum-test` with a mock Chat Backend.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use chat_assistant::AppState;
use chat_assistant::backend::HttpChatBackend;
use chat_assistant::config::{AppConfig, BackendConfig, ServerConfig};
use chat_assistant::server::router;
use chat_assistant::ui::{SCRIPT_PATH, STYLESHEET_PATH};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn test_server(backend: BackendConfig) -> TestServer {
    test_server_at("", backend)
}

fn test_server_at(public_url: &str, backend: BackendConfig) -> TestServer {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "static".to_string(),
            public_url: public_url.to_string(),
        },
        backend,
    };
    let state = AppState {
        config: Arc::new(config),
        backend: Arc::new(HttpChatBackend::new()),
    };
    TestServer::new(router(state)).expect("Failed to start test server")
}

fn local_backend(uri: String) -> BackendConfig {
    BackendConfig {
        local_url: uri,
        production_url: String::new(),
    }
}

fn host(value: &'static str) -> (HeaderName, HeaderValue) {
    (HeaderName::from_static("host"), HeaderValue::from_static(value))
}

fn htmx() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("hx-request"),
        HeaderValue::from_static("true"),
    )
}

#[tokio::test]
async fn test_get_renders_empty_page() {
    let server = test_server(BackendConfig::default());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("AI Chat Assistant"));
    assert!(html.contains("Powered by Giorgiet"));
    assert!(!html.contains("Error:"));
    assert!(!html.contains("Response:"));
}

#[tokio::test]
async fn test_htmx_submit_returns_reply_fragment() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "Hello from the coach" })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = test_server(local_backend(backend.uri()));

    let (host_name, host_value) = host("localhost:3000");
    let (hx_name, hx_value) = htmx();
    let response = server
        .post("/")
        .add_header(host_name, host_value)
        .add_header(hx_name, hx_value)
        .form(&[("message", "How do I stay focused?")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("<html"));
    assert!(html.contains("id=\"chat-page\""));
    assert!(html.contains("Response:"));
    assert!(html.contains("Hello from the coach"));
    assert!(!html.contains("How do I stay focused?"));
}

#[tokio::test]
async fn test_plain_submit_returns_full_page_with_error() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "errors": ["A", "B"] })))
        .mount(&backend)
        .await;
    let server = test_server(local_backend(backend.uri()));

    let (host_name, host_value) = host("localhost");
    let response = server
        .post("/")
        .add_header(host_name, host_value)
        .form(&[("message", "keep me")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Error:"));
    assert!(html.contains("A. B"));
    assert!(html.contains("keep me"));
    assert!(!html.contains("Response:"));
}

#[tokio::test]
async fn test_blank_submit_sends_nothing() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "unexpected" })))
        .expect(0)
        .mount(&backend)
        .await;
    let server = test_server(local_backend(backend.uri()));

    let (host_name, host_value) = host("localhost");
    let response = server
        .post("/")
        .add_header(host_name, host_value)
        .form(&[("message", "   ")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("Error:"));
    assert!(!html.contains("Response:"));
}

#[tokio::test]
async fn test_production_host_uses_configured_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "from production" })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = test_server(BackendConfig {
        local_url: "http://127.0.0.1:9".to_string(),
        production_url: backend.uri(),
    });

    let (host_name, host_value) = host("chat.example.com");
    let (hx_name, hx_value) = htmx();
    let response = server
        .post("/")
        .add_header(host_name, host_value)
        .add_header(hx_name, hx_value)
        .form(&[("message", "Hi")])
        .await;

    assert!(response.text().contains("from production"));
}

#[tokio::test]
async fn test_same_origin_target_ignores_host_header() {
    let published = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "from the published origin" })))
        .expect(1)
        .mount(&published)
        .await;
    let elsewhere = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "from elsewhere" })))
        .expect(0)
        .mount(&elsewhere)
        .await;
    let server = test_server_at(&published.uri(), local_backend("http://127.0.0.1:9".to_string()));

    let elsewhere_host = elsewhere.address().to_string();
    let (hx_name, hx_value) = htmx();
    let response = server
        .post("/")
        .add_header(
            HeaderName::from_static("host"),
            HeaderValue::from_str(&elsewhere_host).expect("valid host header"),
        )
        .add_header(hx_name, hx_value)
        .form(&[("message", "hi")])
        .await;

    let html = response.text();
    assert!(html.contains("from the published origin"));
    assert!(!html.contains("from elsewhere"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let server = test_server(BackendConfig::default());

    let script = server.get(SCRIPT_PATH).await;
    script.assert_status_ok();
    assert!(script.text().contains("data-chat-form"));

    let stylesheet = server.get(STYLESHEET_PATH).await;
    stylesheet.assert_status_ok();
    assert!(stylesheet.text().contains(".chat-indicator.is-active"));
}
