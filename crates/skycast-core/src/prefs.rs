//! The persisted preference surface.
//!
//! Earlier iterations of the dashboard kept the theme in a cookie in one
//! script and in localStorage in another; here it lives behind one get/set
//! contract, persisted with the rest of the configuration.

use std::path::PathBuf;

use crate::config::{Config, Theme};
use crate::error::ConfigError;

/// Loaded configuration plus the path it persists to.
#[derive(Debug, Clone)]
pub struct Preferences {
    config: Config,
    path: PathBuf,
}

impl Preferences {
    /// Load preferences from the platform config directory, creating the
    /// file with defaults on first run.
    pub fn load() -> anyhow::Result<Self> {
        let path = Config::config_path()?;
        let config = Config::load_from(&path)?;
        Ok(Self { config, path })
    }

    /// Build preferences from an already-loaded config and an explicit
    /// persistence path.
    pub fn from_parts(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.config.ui.theme
    }

    /// Set and persist the theme preference.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigError> {
        self.config.ui.theme = theme;
        self.config.save_to(&self.path)?;
        tracing::info!(%theme, "theme preference saved");
        Ok(())
    }
}
