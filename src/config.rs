//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::{Deserialize, Serialize};
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_API_BASE;
use crate::export::ExportSettings;

/// Environment variable overriding `api.base_url`
pub const ENV_API_URL: &str = "REVIEW_INSIGHTS_API_URL";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "REVIEW_INSIGHTS_LOG_LEVEL";
/// Environment variable overriding `logging.format`
pub const ENV_LOG_FORMAT: &str = "REVIEW_INSIGHTS_LOG_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics backend configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    /// Apply overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format;
        }
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config
            .export
            .validate()
            .map_err(|e| ConfigError::Invalid {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        Ok(config)
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

    /// Candidate config file locations, most specific last
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("review-insights").join("config.toml")),
            Some(PathBuf::from("./review-insights.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    ///
    /// The first existing file wins. A file that exists but fails to load is
    /// an error, not a fallback to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::info!("Using default config with environment overrides");
                Ok(Self::from_env())
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }
}

/// Configuration errors
#[cfg(feature = "native")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid settings in {path:?}: {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Review Insights Configuration
#
# Environment variables override these settings:
# - REVIEW_INSIGHTS_API_URL
# - REVIEW_INSIGHTS_LOG_LEVEL
# - REVIEW_INSIGHTS_LOG_FORMAT

[api]
# Analytics backend serving /api/reviews, /api/statistics, ...
base_url = "http://localhost:8000"

[export]
# Page size in millimetres (portrait)
page_width_mm = 210.0
page_height_mm = 398.0

# Capture resolution multiplier
pixel_density = 2.0

# Wait after scrolling to the top before capturing (ms)
settle_delay_ms = 500

# Multiplier on the placed image height. 1.0 keeps the aspect ratio,
# 1.3 reproduces the stretched layout of early reports.
height_correction = 1.0

file_name = "e-GMAT_Analysis_Report.pdf"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(Path::new("generated"), &generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://reviews.example.com\"\n\n[export]\nheight_correction = 1.3"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://reviews.example.com");
        assert_eq!(config.export.height_correction, 1.3);
        assert_eq!(config.export.page_height_mm, 398.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_bad_export_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\npixel_density = 0.0").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_default_location_with_bad_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review-insights.toml");
        std::fs::write(&path, "[export]\npage_height_mm = 100.0\nheight_correction = \"oops\"\n")
            .unwrap();

        let err = Config::load_first(&[dir.path().join("absent.toml"), path]).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("review-insights.toml"));
    }

    #[test]
    fn test_default_location_missing_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_first(&[dir.path().join("absent.toml")]).unwrap();
        assert_eq!(config.export, ExportSettings::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_URL, "http://10.0.0.5:9000"),
            (ENV_LOG_FORMAT, "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_blank_url_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == ENV_API_URL).then(|| "  ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
    }
}
