//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port for the directory API.
    #[serde(default = "default_port")]
    pub port: u16,

    /// IP address the HTTP server binds to. Hostnames are not resolved.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    // === Client Configuration ===
    /// Base URL the presenter fetches users from.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Optional request timeout for the users client. Unset means no timeout.
    #[serde(default)]
    pub http_timeout_ms: Option<u64>,

    // === Logging ===
    /// Log filter directives, e.g. "info" or "user_directory=debug,info".
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format: "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    // === Metrics ===
    /// Install the Prometheus exporter.
    #[serde(default)]
    pub metrics_enabled: bool,

    /// Port for the Prometheus exporter.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_metrics_port() -> u16 {
    9090
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_addr: default_bind_addr(),
            api_base_url: default_api_base_url(),
            http_timeout_ms: None,
            rust_log: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: false,
            metrics_port: default_metrics_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.bind_addr.parse::<IpAddr>().is_err() {
            return Err(format!(
                "BIND_ADDR must be an IP address, got {:?}",
                self.bind_addr
            ));
        }

        if let Err(e) = EnvFilter::try_new(&self.rust_log) {
            return Err(format!("RUST_LOG is not a valid filter: {}", e));
        }

        if self.api_base_url.is_empty() {
            return Err("API_BASE_URL is required".to_string());
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err("API_BASE_URL must start with http:// or https://".to_string());
        }

        if self.http_timeout_ms == Some(0) {
            return Err("HTTP_TIMEOUT_MS must be greater than 0 when set".to_string());
        }

        if !matches!(self.log_format.as_str(), "pretty" | "json") {
            return Err(format!(
                "LOG_FORMAT must be \"pretty\" or \"json\", got {:?}",
                self.log_format
            ));
        }

        if self.metrics_enabled && self.metrics_port == self.port {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Socket address the HTTP server listens on.
    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self.bind_addr.parse().map_err(|_| {
            AppError::InvalidConfig(format!(
                "BIND_ADDR must be an IP address, got {:?}",
                self.bind_addr
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Log filter for the subscriber. `verbose` forces debug for this crate.
    pub fn log_filter(&self, verbose: bool) -> EnvFilter {
        if verbose {
            return EnvFilter::new("user_directory=debug,info");
        }
        EnvFilter::try_new(&self.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Whether logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }

    /// Users endpoint derived from the base URL.
    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.api_base_url.trim_end_matches('/'))
    }
}
