//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::server::ServerConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
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

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here: this runs before the subscriber exists, so
    /// the caller logs the returned [`ConfigSource`] once logging is up.
    pub fn load_default() -> (Self, ConfigSource) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("pivori-studio").join("config.toml")),
            Some(PathBuf::from("/etc/pivori-studio/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file in `paths` that parses, falling back to
    /// environment-only config. Files that exist but fail are recorded.
    pub fn load_first(paths: &[PathBuf]) -> (Self, ConfigSource) {
        let mut source = ConfigSource::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    source.path = Some(path.clone());
                    return (config, source);
                }
                Err(e) => source.failures.push(e),
            }
        }

        (Self::from_env(), source)
    }

    /// Apply `PIVORI_*` overrides, reading variables through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("PIVORI_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PIVORI_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PIVORI_PORT: {}", port),
            }
        }
        if let Some(dist_dir) = lookup("PIVORI_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        if let Some(level) = lookup("PIVORI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PIVORI_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Default)]
pub struct ConfigSource {
    /// File the config was read from, `None` for environment only
    pub path: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub failures: Vec<ConfigError>,
}

impl ConfigSource {
    /// Source for an explicitly given file
    pub fn file(path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            failures: Vec::new(),
        }
    }

    /// Report the source through tracing
    pub fn log(&self) {
        for failure in &self.failures {
            tracing::warn!("Skipping config file: {}", failure);
        }

        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# Pivori Studio Configuration
#
# Environment variables override these settings:
# - PIVORI_HOST
# - PIVORI_PORT
# - PIVORI_DIST_DIR
# - PIVORI_LOG_LEVEL
# - PIVORI_LOG_FORMAT

[server]
# Address to bind
host = "0.0.0.0"
port = 8084

# Directory holding the built dashboard (index.html, .wasm, .js)
dist_dir = "pivori-ui/dist"

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

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.server.dist_dir, PathBuf::from("pivori-ui/dist"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, ServerConfig::default().host);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PIVORI_HOST", "127.0.0.1"),
            ("PIVORI_PORT", "3000"),
            ("PIVORI_DIST_DIR", "/srv/pivori"),
            ("PIVORI_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/pivori"));
        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "PIVORI_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, ServerConfig::default().port);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.level, "debug");

        let missing = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        std::fs::write(&path, "[server\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_first_records_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        let missing = dir.path().join("missing.toml");
        std::fs::write(&broken, "[server\nport = 9999\n").unwrap();
        std::fs::write(&valid, "[logging]\nlevel = \"trace\"\n").unwrap();

        let (config, source) = Config::load_first(&[missing, broken.clone(), valid.clone()]);

        assert_eq!(config.logging.level, "trace");
        assert_eq!(source.path, Some(valid));
        assert_eq!(source.failures.len(), 1);
        assert!(matches!(
            &source.failures[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));
    }

    #[test]
    fn test_load_first_without_usable_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[server\n").unwrap();

        let (config, source) = Config::load_first(&[broken]);

        assert_eq!(config.server.port, ServerConfig::default().port);
        assert!(source.path.is_none());
        assert_eq!(source.failures.len(), 1);
    }
}
