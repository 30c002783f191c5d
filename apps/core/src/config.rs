use crate::error::AppError;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_PATH: &str = "data/db/prompts.sqlite";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Every variable is optional; defaults suit local development.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind the HTTP server to.
    pub host: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Location of the SQLite database file.
    pub database_path: PathBuf,
    /// Exposes underlying error messages in 500 responses.
    pub debug: bool,
    pub log_format: LogFormat,
    /// Allowed CORS origins. Empty, or any `*` entry, allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            debug: false,
            log_format: LogFormat::Pretty,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `APP_HOST`: bind host (default `127.0.0.1`)
    /// - `APP_PORT`: bind port (default `8000`)
    /// - `DATABASE_PATH`: SQLite file (default `data/db/prompts.sqlite`)
    /// - `APP_DEBUG`: expose error details (default `false`)
    /// - `LOG_FORMAT`: `pretty` or `json` (default `pretty`)
    /// - `CORS_ALLOWED_ORIGINS`: comma-separated origins, `*` for any (default: any)
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let host = non_empty_var("APP_HOST").unwrap_or(defaults.host);

        let port = match non_empty_var("APP_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                AppError::Config(format!("APP_PORT must be a port number, got '{}': {}", raw, e))
            })?,
            None => defaults.port,
        };

        let database_path = non_empty_var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);

        let debug = match non_empty_var("APP_DEBUG") {
            Some(raw) => parse_bool("APP_DEBUG", &raw)?,
            None => defaults.debug,
        };

        let log_format = match non_empty_var("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        let cors_origins = non_empty_var("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            database_path,
            debug,
            log_format,
            cors_origins,
        })
    }

    /// Socket address the server binds to.
    ///
    /// `host` may be an IP literal or a host name such as `localhost`;
    /// the first resolved address is used.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        let invalid = |reason: String| {
            AppError::Config(format!(
                "Invalid bind address '{}:{}': {}",
                self.host, self.port, reason
            ))
        };

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}
