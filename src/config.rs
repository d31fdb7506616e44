//! Configuration for the client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/broadsheet/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the API base URL
pub const API_URL_ENV: &str = "BROADSHEET_API_URL";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the blog backend
    pub api_url: String,

    /// Public site base used when composing share links. Defaults to the
    /// API base when not set explicitly - a terminal client has no page
    /// origin to derive it from.
    pub site_url: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

/// Logging configuration
///
/// The TUI owns the terminal while running, so logs go to rotating files
/// instead of stdout. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let file_dir = dirs::data_local_dir()
            .map(|d| d.join("broadsheet").join("logs"))
            .unwrap_or_else(|| PathBuf::from("./logs"));
        Self {
            level: "info".to_string(),
            file_enabled: true,
            file_dir,
            file_prefix: "broadsheet.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let api_url = "http://localhost:4000".to_string();
        Self {
            site_url: api_url.clone(),
            api_url,
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub site_url: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

impl Config {
    /// Load configuration: defaults, overlaid by the config file, overlaid
    /// by environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(raw) = std::fs::read_to_string(&path) {
                match toml::from_str::<FileConfig>(&raw) {
                    Ok(file) => config = config.apply_file(file),
                    Err(e) => eprintln!("Warning: ignoring malformed config {path:?}: {e}"),
                }
            }
        }

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                // When only the API base is overridden, share links follow it
                if config.site_url == config.api_url {
                    config.site_url = url.trim().to_string();
                }
                config.api_url = url.trim().to_string();
            }
        }

        config
    }

    /// Overlay file values onto this config
    pub(crate) fn apply_file(mut self, file: FileConfig) -> Self {
        if let Some(api_url) = file.api_url {
            // site_url tracks api_url unless the file pins it separately
            if self.site_url == self.api_url {
                self.site_url = api_url.clone();
            }
            self.api_url = api_url;
        }
        if let Some(site_url) = file.site_url {
            self.site_url = site_url;
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(enabled) = logging.file_enabled {
                self.logging.file_enabled = enabled;
            }
            if let Some(dir) = logging.file_dir {
                self.logging.file_dir = PathBuf::from(dir);
            }
            if let Some(prefix) = logging.file_prefix {
                self.logging.file_prefix = prefix;
            }
            if let Some(rotation) = logging.file_rotation {
                self.logging.file_rotation = rotation;
            }
        }
        self
    }

    /// Path of the config file (~/.config/broadsheet/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("broadsheet").join("config.toml"))
    }

    /// Path of the persisted session token - the one well-known key
    pub fn token_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("broadsheet").join("token"))
            .unwrap_or_else(|| PathBuf::from(".broadsheet-token"))
    }

    /// Write a template config on first run so users can discover options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Config::default().to_toml());
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> String {
        let rotation = match self.logging.file_rotation {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        };
        format!(
            "# broadsheet configuration\n\
             # Environment override: {env} takes precedence over api_url.\n\
             \n\
             api_url = {api_url:?}\n\
             site_url = {site_url:?}\n\
             \n\
             [logging]\n\
             level = {level:?}\n\
             file_enabled = {file_enabled}\n\
             file_dir = {file_dir:?}\n\
             file_prefix = {file_prefix:?}\n\
             file_rotation = {rotation:?}\n",
            env = API_URL_ENV,
            api_url = self.api_url,
            site_url = self.site_url,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that serialized config can be parsed back
    #[test]
    fn default_config_roundtrips_through_toml() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );
    }

    #[test]
    fn file_values_overlay_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            api_url = "http://blog.internal:9000"

            [logging]
            level = "debug"
            file_rotation = "never"
            "#,
        )
        .unwrap();

        let config = Config::default().apply_file(file);
        assert_eq!(config.api_url, "http://blog.internal:9000");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_rotation, LogRotation::Never);
        // Unset values keep their defaults
        assert!(config.logging.file_enabled);
    }

    #[test]
    fn site_url_follows_api_url_unless_pinned() {
        let follows: FileConfig =
            toml::from_str(r#"api_url = "http://blog.internal:9000""#).unwrap();
        let config = Config::default().apply_file(follows);
        assert_eq!(config.site_url, "http://blog.internal:9000");

        let pinned: FileConfig = toml::from_str(
            r#"
            api_url = "http://blog.internal:9000"
            site_url = "https://blog.example.com"
            "#,
        )
        .unwrap();
        let config = Config::default().apply_file(pinned);
        assert_eq!(config.site_url, "https://blog.example.com");
    }
}
