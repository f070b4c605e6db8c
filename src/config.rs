use std::path::PathBuf;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::chat::DEFAULT_GREETING;

/// Prefix for environment overrides, e.g. `SENTIMENT_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "SENTIMENT";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the sentiment backend
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub widget: WidgetConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Scheme, host and port of the sentiment service.
    pub base_url: String,
    /// Path of the chat endpoint, joined onto `base_url`.
    pub chat_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub title: String,
    pub greeting: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag (or its env var) > `SENTIMENT_*` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 8080)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("backend.base_url", "http://127.0.0.1:5000")?
            .set_default("backend.chat_path", "/chat")?
            .set_default("widget.title", "Sentiment Analysis Assistant")?
            .set_default("widget.greeting", DEFAULT_GREETING)?
            .set_default("logging.json", false)?;

        // An explicit file must exist; ./config.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::from(path.as_path())),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.backend_url {
            builder = builder.set_override("backend.base_url", url)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("logging.json", json)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
