use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

/// Endpoint used when the page is served from `localhost`.
pub const DEFAULT_LOCAL_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "CHAT_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Public origin of this server, used for same-origin backend requests
    #[arg(long, env = "CHAT_PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Production backend base URL (empty means same-origin)
    #[arg(long, env = "CHAT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Backend used when the page is served from localhost
    #[arg(long, env = "CHAT_LOCAL_BACKEND_URL")]
    pub local_backend_url: Option<String>,

    /// Send a single message and print the reply instead of serving the page
    #[arg(short, long)]
    pub message: Option<String>,

    /// Hostname the one-shot client pretends to run under
    #[arg(long, default_value = "localhost")]
    pub hostname: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Origin the page is published under, e.g. `https://chat.example.com`.
    /// Empty means the bind address.
    #[serde(default)]
    pub public_url: String,
}

impl ServerConfig {
    /// Origin for same-origin backend requests.
    ///
    /// Taken from `public_url`, or the bind address when that is empty. Never
    /// derived from request headers, which the client controls.
    pub fn origin(&self) -> Result<Url, url::ParseError> {
        let public_url = self.public_url.trim();
        if !public_url.is_empty() {
            return Url::parse(public_url);
        }
        let host = match self.host.as_str() {
            "0.0.0.0" => "127.0.0.1",
            "::" | "[::]" => "[::1]",
            host => host,
        };
        Url::parse(&format!("http://{host}:{}/", self.port))
    }
}

/// Inputs for base URL resolution.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Fixed development endpoint, used when the hostname is `localhost`.
    pub local_url: String,
    /// Production base URL. Empty selects same-origin requests.
    #[serde(default)]
    pub production_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            local_url: DEFAULT_LOCAL_BACKEND_URL.to_string(),
            production_url: String::new(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    /// Build the layered configuration.
    ///
    /// Priority: CLI flag (or its env alias) > `CHAT_` env vars > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("server.public_url", "")?
            .set_default("backend.local_url", DEFAULT_LOCAL_BACKEND_URL)?
            .set_default("backend.production_url", "")?;

        // An explicit file must exist; the cwd fallback is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. CHAT_SERVER__PORT=8080, CHAT_BACKEND__PRODUCTION_URL=https://api.example.com
        builder = builder.add_source(
            Environment::with_prefix("CHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = &cli.host {
            builder = builder.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = &cli.public_url {
            builder = builder.set_override("server.public_url", url.as_str())?;
        }
        if let Some(url) = &cli.backend_url {
            builder = builder.set_override("backend.production_url", url.as_str())?;
        }
        if let Some(url) = &cli.local_backend_url {
            builder = builder.set_override("backend.local_url", url.as_str())?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
