//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infrastructure::catalog::OMDB_API_BASE;
use crate::infrastructure::image::DEFAULT_CACHE_CAPACITY;

pub(crate) const APP_NAME: &str = "poster-cache";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Image cache configuration.
    #[serde(default)]
    pub image_cache: ImageCacheConfig,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Image cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCacheConfig {
    /// Maximum number of decoded images held in memory.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Movie catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog API endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OMDb API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_base_url() -> String {
    OMDB_API_BASE.to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(capacity) = args.capacity {
            self.image_cache.capacity = capacity;
        }
        if let Some(api_key) = &args.api_key {
            self.catalog.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &args.base_url {
            self.catalog.base_url.clone_from(base_url);
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            image_cache: ImageCacheConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"

            [image_cache]
            capacity = 25

            [catalog]
            api_key = "abc123"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.image_cache.capacity, 25);
        assert_eq!(config.catalog.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.catalog.base_url, OMDB_API_BASE);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.image_cache.capacity, 100);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.catalog.api_key.is_none());
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config: AppConfig = toml::from_str("[image_cache]\ncapacity = 25\n").unwrap();
        let args = CliArgs::parse_from([
            "poster-cache",
            "--capacity",
            "7",
            "--log-level",
            "trace",
            "--api-key",
            "k",
            "batman",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.image_cache.capacity, 7);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.catalog.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_unset_args_keep_file_values() {
        let mut config: AppConfig = toml::from_str("[image_cache]\ncapacity = 25\n").unwrap();
        let args = CliArgs::parse_from(["poster-cache", "batman"]);

        config.merge_with_args(&args);

        assert_eq!(config.image_cache.capacity, 25);
    }
}
