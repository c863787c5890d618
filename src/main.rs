//! skycast — hourly forecast dashboard for the terminal.
//!
//! Pipeline per action: points lookup → hourly fetch → 24-hour window →
//! two rows of cards. Saved locations and the theme preference ride along.

use clap::Parser;

mod app;
mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    skycast_core::init()?;

    let prefs = skycast_core::Preferences::load()?;
    let validation = prefs.config().validate();
    if !validation.is_valid() {
        anyhow::bail!(
            "Configuration validation failed: {}",
            validation.error_summary()
        );
    }
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    let state = app::AppState::new(prefs)?;
    cli::Cli::parse().run(state).await
}
