use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// A single problem found while validating the configuration.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Forecast provider settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// External collaborator endpoints
    #[serde(default)]
    pub services: ServicesConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the forecast provider's points API
    pub points_base_url: String,

    /// Contact folded into the identifying User-Agent header the provider
    /// asks integrators to send
    pub user_agent_contact: String,
}

impl WeatherConfig {
    /// The full identifying header value: application name plus contact.
    pub fn user_agent(&self) -> String {
        format!(
            "skycast/{} ({})",
            env!("CARGO_PKG_VERSION"),
            self.user_agent_contact
        )
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            points_base_url: "https://api.weather.gov".to_string(),
            user_agent_contact: "you@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the saved-locations REST backend
    pub locations_api_url: String,

    /// Base URL of the platform identity endpoint (`/.auth/me` lives here)
    pub auth_base_url: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            locations_api_url: "http://localhost:3000".to_string(),
            auth_base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Persisted theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ConfigError::Invalid(format!(
                "unknown theme '{s}', expected 'light' or 'dark'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme preference
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Load configuration from the platform config directory, creating the
    /// file with defaults on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Ok(Self::load_from(&path)?)
    }

    /// Load configuration from an explicit path, creating the file with
    /// defaults if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration and validate it.
    ///
    /// Fails on validation errors; warnings are logged and tolerated.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(
            &self.weather.points_base_url,
            "weather.points_base_url",
            &mut result,
        );
        self.validate_url(
            &self.services.locations_api_url,
            "services.locations_api_url",
            &mut result,
        );
        self.validate_url(
            &self.services.auth_base_url,
            "services.auth_base_url",
            &mut result,
        );

        if self.weather.user_agent_contact.trim().is_empty() {
            result.add_error(
                "weather.user_agent_contact",
                "The forecast provider requires an identifying contact",
            );
        } else if self.weather.user_agent_contact == WeatherConfig::default().user_agent_contact {
            result.add_warning(
                "weather.user_agent_contact",
                "Contact is still the placeholder - set it to a reachable address",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the platform config directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        Ok(self.save_to(&path)?)
    }

    /// Save configuration to an explicit path, creating parent directories
    /// as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(
            result.is_valid(),
            "Default config should be valid: {:?}",
            result.errors
        );
    }

    #[test]
    fn test_placeholder_contact_is_warning() {
        let config = Config::default();
        let result = config.validate();
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "weather.user_agent_contact"));
    }

    #[test]
    fn test_empty_contact_is_error() {
        let mut config = Config::default();
        config.weather.user_agent_contact = "  ".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.services.locations_api_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "services.locations_api_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.points_base_url = "ftp://api.weather.gov".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result
            .errors
            .iter()
            .any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_user_agent_includes_contact() {
        let mut config = Config::default();
        config.weather.user_agent_contact = "ops@example.net".to_string();
        let ua = config.weather.user_agent();
        assert!(ua.starts_with("skycast/"));
        assert!(ua.ends_with("(ops@example.net)"));
    }

    #[test]
    fn test_first_run_creates_default_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).expect("first load");
        assert!(path.exists());
        assert_eq!(
            config.weather.points_base_url,
            "https://api.weather.gov"
        );
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.ui.theme = Theme::Dark;
        config.services.locations_api_url = "https://store.example.com".to_string();
        config.save_to(&path).expect("save");

        let reloaded = Config::load_from(&path).expect("reload");
        assert_eq!(reloaded.ui.theme, Theme::Dark);
        assert_eq!(
            reloaded.services.locations_api_url,
            "https://store.example.com"
        );
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().expect("parse"), Theme::Dark);
        assert_eq!("Light".parse::<Theme>().expect("parse"), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
