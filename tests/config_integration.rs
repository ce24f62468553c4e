use chat_assistant::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const ENV_VARS: &[&str] = &[
    "CONFIG_FILE",
    "CHAT_HOST",
    "PORT",
    "CHAT_BACKEND_URL",
    "CHAT_LOCAL_BACKEND_URL",
    "CHAT_PUBLIC_URL",
    "CHAT_SERVER__PORT",
    "CHAT_BACKEND__PRODUCTION_URL",
];

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    for var in ENV_VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

fn load(args: &[&str]) -> AppConfig {
    let mut argv = vec!["chat-assistant"];
    argv.extend_from_slice(args);
    AppConfig::load_from_args(argv).expect("Failed to load config")
}

/// Removes a file when dropped, so a failed assertion still cleans up.
struct RemoveOnDrop(&'static str);

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        let _ = fs::remove_file(self.0);
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.server.public_url, "");
    assert_eq!(config.backend.local_url, "http://localhost:8000");
    assert_eq!(config.backend.production_url, "");
}

#[test]
#[serial]
fn test_prefixed_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_SERVER__PORT", "9090");
        env::set_var("CHAT_BACKEND__PRODUCTION_URL", "https://api.example.com");
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.backend.production_url, "https://api.example.com");

    clear_env_vars();
}

#[test]
#[serial]
fn test_backend_url_env_alias() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_BACKEND_URL", "https://backend.example.com");
    }

    let config = load(&[]);
    assert_eq!(config.backend.production_url, "https://backend.example.com");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flags_win_over_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_SERVER__PORT", "9090");
    }

    let config = load(&[
        "--port",
        "8081",
        "--host",
        "0.0.0.0",
        "--local-backend-url",
        "http://localhost:9000",
        "--public-url",
        "https://chat.example.com",
    ]);
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.backend.local_url, "http://localhost:9000");
    assert_eq!(config.server.public_url, "https://chat.example.com");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        "server:\n  port: 7070\nbackend:\n  production_url: https://prod.example.com"
    )
    .expect("Failed to write temp config");
    let path = file.path().to_str().unwrap().to_string();

    let config = load(&["--config", &path]);
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.backend.production_url, "https://prod.example.com");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["chat-assistant", "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let _cleanup = RemoveOnDrop("config.yaml");
    fs::write("config.yaml", "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let config = load(&[]);
    assert_eq!(config.server.port, 6060);
}

#[test]
#[serial]
fn test_invalid_flag_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["chat-assistant", "--no-such-flag"]);
    assert!(result.is_err());
}
