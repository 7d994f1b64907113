use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, endpoints, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_default_data_dir, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the library and the update tool.
/// Handles loading, saving, and managing endpoint and storage settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Root of the GameDay directory tree.
    #[serde(default = "default_gameday_url")]
    pub gameday_url: String,
    /// Location of the league/team properties document.
    #[serde(default = "default_properties_url")]
    pub properties_url: String,
    /// Host of the JSON lookup services.
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
    /// Local game database. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_gameday_url() -> String {
    endpoints::GAMEDAY_URL.to_string()
}

fn default_properties_url() -> String {
    endpoints::PROPERTIES_URL.to_string()
}

fn default_lookup_url() -> String {
    endpoints::LOOKUP_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gameday_url: default_gameday_url(),
            properties_url: default_properties_url(),
            lookup_url: default_lookup_url(),
            data_dir: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the built-in defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MLBGAME_GAMEDAY_URL` - Override the GameDay root
    /// - `MLBGAME_PROPERTIES_URL` - Override the properties document
    /// - `MLBGAME_LOOKUP_URL` - Override the lookup service host
    /// - `MLBGAME_DATA_DIR` - Override the local game database location
    /// - `MLBGAME_LOG_FILE` - Override log file path
    /// - `MLBGAME_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `MLBGAME_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::GAMEDAY_URL) {
            self.gameday_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::PROPERTIES_URL) {
            self.properties_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::LOOKUP_URL) {
            self.lookup_url = url;
        }

        if let Ok(dir) = std::env::var(env_vars::DATA_DIR) {
            self.data_dir = Some(dir);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &[
                ("gameday_url", &self.gameday_url),
                ("properties_url", &self.properties_url),
                ("lookup_url", &self.lookup_url),
            ],
            &self.data_dir,
            &self.log_file_path,
            self.http_timeout_seconds,
        )
    }

    /// Directory holding the local game database.
    pub fn data_dir_path(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(get_default_data_dir()),
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays these settings to stdout.
    ///
    /// Shows the values in effect for this run, including command line
    /// overrides applied after loading.
    pub fn display(&self) {
        println!("{self}");
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the endpoints so URL builders can append path segments.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            gameday_url: self.gameday_url.trim_end_matches('/').to_string(),
            properties_url: self.properties_url.clone(),
            lookup_url: self.lookup_url.trim_end_matches('/').to_string(),
            data_dir: self.data_dir.clone(),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "────────────────────────────────────";
        let config_path = get_config_path();

        writeln!(f, "\nCurrent Configuration")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Config Location:")?;
        writeln!(f, "{config_path}")?;
        if !Path::new(&config_path).exists() {
            writeln!(f, "(Not created, using defaults)")?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "GameDay URL:\n{}", self.gameday_url)?;
        writeln!(f, "Properties URL:\n{}", self.properties_url)?;
        writeln!(f, "Lookup URL:\n{}", self.lookup_url)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Game Database:\n{}", self.data_dir_path().display())?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "HTTP Timeout:\n{} seconds", self.http_timeout_seconds)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Log File Location:")?;
        match &self.log_file_path {
            Some(custom_path) => write!(f, "{custom_path}"),
            None => write!(f, "{}/mlbgame.log\n(Default location)", get_log_dir_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
gameday_url = "http://localhost:8080/components/game/mlb"
data_dir = "/srv/mlbgame"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(
            config.gameday_url,
            "http://localhost:8080/components/game/mlb"
        );
        assert_eq!(config.data_dir, Some("/srv/mlbgame".to_string()));
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        // Missing keys fall back to defaults
        assert_eq!(config.lookup_url, endpoints::LOOKUP_URL);
        assert_eq!(config.properties_url, endpoints::PROPERTIES_URL);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("empty_config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_strips_trailing_slashes() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            gameday_url: "http://gd2.mlb.com/components/game/mlb/".to_string(),
            lookup_url: "http://mlb.mlb.com//".to_string(),
            ..Config::default()
        };

        config.save_to_path(&config_path_str).await.unwrap();
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(loaded.gameday_url, "http://gd2.mlb.com/components/game/mlb");
        assert_eq!(loaded.lookup_url, "http://mlb.mlb.com");
    }

    #[tokio::test]
    async fn test_config_save_creates_nested_directories() {
        let temp_dir = tempdir().unwrap();
        let nested_path = temp_dir
            .path()
            .join("level1")
            .join("level2")
            .join("config.toml");
        let nested_path_str = nested_path.to_string_lossy();

        Config::default()
            .save_to_path(&nested_path_str)
            .await
            .unwrap();

        assert!(nested_path.exists());
        let loaded = Config::load_from_path(&nested_path_str).await.unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            data_dir: Some("/data/gameday".to_string()),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 12,
            ..Config::default()
        };

        original_config.save_to_path(&config_path_str).await.unwrap();
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");

        let malformed_content = r#"
gameday_url = "http://gd2.mlb.com
[invalid_section
"#;
        tokio::fs::write(&config_path, malformed_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[test]
    fn test_config_without_optional_paths_serialization() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml_string.contains("gameday_url = \"http://gd2.mlb.com/components/game/mlb\""));
        // None values are skipped entirely
        assert!(!toml_string.contains("data_dir"));
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_data_dir_path_prefers_configured_value() {
        let config = Config {
            data_dir: Some("/srv/mlbgame".to_string()),
            ..Config::default()
        };
        assert_eq!(config.data_dir_path(), PathBuf::from("/srv/mlbgame"));

        let default_dir = Config::default().data_dir_path();
        assert!(default_dir.ends_with("gameday"));
    }

    #[test]
    fn test_display_shows_overridden_data_dir() {
        let config = Config {
            data_dir: Some("/tmp/gameday-override".to_string()),
            log_file_path: Some("/tmp/update.log".to_string()),
            ..Config::default()
        };
        let text = config.to_string();
        assert!(text.contains("Game Database:\n/tmp/gameday-override"));
        assert!(text.contains("GameDay URL:\nhttp://gd2.mlb.com/components/game/mlb"));
        assert!(text.ends_with("Log File Location:\n/tmp/update.log"));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("mlbgame"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("mlbgame"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());

        let invalid_configs = vec![
            Config {
                gameday_url: String::new(),
                ..Config::default()
            },
            Config {
                lookup_url: "mlb.mlb.com".to_string(),
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
            Config {
                http_timeout_seconds: 0,
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }
}
