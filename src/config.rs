//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::fetch::ClientConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote fitness API configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Explicit base URL; wins over `codespace_name`
    pub base_url: Option<String>,

    /// GitHub Codespace hosting the API on port 8000
    pub codespace_name: Option<String>,

    /// Request timeout in seconds; unset means no timeout
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl ApiConfig {
    /// Base URL the fetcher talks to
    pub fn resolved_base_url(&self) -> String {
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return url.trim().trim_end_matches('/').to_string();
        }

        match self.codespace_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("https://{}-8000.app.github.dev", name),
            _ => default_base_url(),
        }
    }

    /// Client configuration for [`crate::fetch::ResourceClient`]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.resolved_base_url(),
            request_timeout_ms: self.request_timeout_secs.map(|s| s.saturating_mul(1000)),
        }
    }
}

/// Web front-end server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("/etc/octofit/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Explicit path if given, default search otherwise
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides; a codespace from the environment outranks a file's base_url
        if let Some(name) = var("OCTOFIT_CODESPACE_NAME") {
            self.api.codespace_name = Some(name);
            self.api.base_url = None;
        }
        if let Some(url) = var("OCTOFIT_API_URL") {
            self.api.base_url = Some(url);
        }

        // Server overrides
        if let Some(host) = var("OCTOFIT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("OCTOFIT_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Tracker Configuration
#
# Environment variables override these settings:
# - OCTOFIT_API_URL
# - OCTOFIT_CODESPACE_NAME
# - OCTOFIT_HOST
# - OCTOFIT_PORT
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[api]
# Base URL of the fitness REST API (collections live under /api/)
# Defaults to http://localhost:8000
# base_url = "http://localhost:8000"

# When base_url is unset, the API is reached through a GitHub Codespace:
# https://<codespace_name>-8000.app.github.dev
# codespace_name = "my-codespace"

# Request timeout in seconds (no timeout when unset)
# request_timeout_secs = 30

[server]
# Web front-end host
host = "0.0.0.0"

# Web front-end port
port = 3000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.resolved_base_url(), "http://localhost:8000");
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.api.client_config().request_timeout_ms, None);
    }

    #[test]
    fn test_codespace_base_url() {
        let api = ApiConfig {
            codespace_name: Some("octo-space".to_string()),
            ..Default::default()
        };
        assert_eq!(
            api.resolved_base_url(),
            "https://octo-space-8000.app.github.dev"
        );

        let explicit = ApiConfig {
            base_url: Some("http://api.local:9000/".to_string()),
            codespace_name: Some("ignored".to_string()),
            request_timeout_secs: Some(5),
        };
        assert_eq!(explicit.resolved_base_url(), "http://api.local:9000");
        assert_eq!(explicit.client_config().request_timeout_ms, Some(5000));
    }

    #[test]
    fn test_huge_timeout_saturates() {
        let api = ApiConfig {
            request_timeout_secs: Some(u64::MAX),
            ..Default::default()
        };
        assert_eq!(api.client_config().request_timeout_ms, Some(u64::MAX));
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.resolved_base_url(), "http://localhost:8000");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ncodespace_name = \"fit\"\n\n[server]\nport = 8080").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.resolved_base_url(), "https://fit-8000.app.github.dev");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/octofit.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();
        let invalid = Config::load(file.path()).unwrap_err();
        assert!(matches!(invalid, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("OCTOFIT_API_URL", "http://10.0.0.2:8000"),
            ("OCTOFIT_PORT", "not-a-number"),
            ("OCTOFIT_HOST", "127.0.0.1"),
            ("OCTOFIT_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.resolved_base_url(), "http://10.0.0.2:8000");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_codespace_env_over_file() {
        let vars: HashMap<&str, &str> = [("OCTOFIT_CODESPACE_NAME", "fit-space")].into_iter().collect();

        let mut generated = Config::parse(&generate_default_config()).unwrap();
        generated.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(
            generated.api.resolved_base_url(),
            "https://fit-space-8000.app.github.dev"
        );

        let mut file = Config::parse("[api]\nbase_url = \"http://api.local:9000\"").unwrap();
        file.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(file.api.resolved_base_url(), "https://fit-space-8000.app.github.dev");
    }

    #[test]
    fn test_api_url_env_over_codespace_env() {
        let vars: HashMap<&str, &str> = [
            ("OCTOFIT_CODESPACE_NAME", "fit-space"),
            ("OCTOFIT_API_URL", "http://10.0.0.2:8000"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.api.resolved_base_url(), "http://10.0.0.2:8000");
    }
}
