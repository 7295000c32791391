use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::validate;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/venust/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("venust").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// The demo account has to satisfy the same field validators the
    /// forms enforce, otherwise sign-in could never succeed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !validate::is_valid_email(&self.auth.demo.email) {
            return Err(ConfigError::ValidationError {
                message: format!("Demo account email '{}' is not valid", self.auth.demo.email),
            });
        }

        if !validate::is_valid_password(&self.auth.demo.password) {
            return Err(ConfigError::ValidationError {
                message: "Demo account password must have at least 6 characters".to_string(),
            });
        }

        if self.auth.demo.display_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Demo account display name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.auth.demo.email, "demo@venust.app");
    }

    #[test]
    fn round_trips_through_toml() {
        let (_dir, path) = write_config(
            r#"
[auth]
latency_ms = 5

[auth.demo]
email = "qa@venust.app"
password = "s3nh4-qa"
display_name = "Conta QA"
"#,
        );

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.auth.demo.email, "qa@venust.app");
        assert_eq!(config.auth.demo.display_name, "Conta QA");
        assert_eq!(config.auth.latency_ms, 5);
    }

    #[test]
    fn partial_demo_table_fills_missing_fields_from_defaults() {
        let (_dir, path) = write_config("[auth.demo]\nemail = \"qa@venust.app\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.auth.demo.email, "qa@venust.app");
        assert_eq!(config.auth.demo.password, "123456");
        assert_eq!(config.auth.demo.display_name, "Usuário Demo");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let (_dir, path) = write_config("auth = {{{");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn invalid_demo_email_fails_validation() {
        let (_dir, path) = write_config("[auth.demo]\nemail = \"not-an-email\"\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn short_demo_password_fails_validation() {
        let (_dir, path) = write_config("[auth.demo]\npassword = \"123\"\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
