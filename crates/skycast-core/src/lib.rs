//! Core pieces shared by the skycast crates: configuration, the persisted
//! theme preference, and tracing setup.

pub mod config;
pub mod error;
pub mod prefs;

pub use config::{Config, ServicesConfig, Theme, UiConfig, ValidationResult, WeatherConfig};
pub use error::ConfigError;
pub use prefs::Preferences;

use anyhow::Result;

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `info` when unset.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("skycast core initialized");
    Ok(())
}
