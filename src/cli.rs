use anyhow::Result;
use clap::{Parser, Subcommand};

use skycast_auth::UserIdentity;
use skycast_core::Theme;
use skycast_weather::{Coordinate, ForecastRows};

use crate::app::AppState;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Hourly forecast dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the next 24 hours of forecast cards for a coordinate.
    Forecast {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },

    /// Show the forecast for a saved location (requires sign-in).
    Saved {
        /// Name the location was saved under.
        name: String,
    },

    /// Manage saved locations (requires sign-in).
    #[command(subcommand)]
    Locations(LocationsCommand),

    /// Show the theme preference, or set it.
    Theme {
        /// New theme: "light" or "dark". Omit to print the current one.
        theme: Option<Theme>,
    },
}

#[derive(Debug, Subcommand)]
pub enum LocationsCommand {
    /// List your saved locations, newest first.
    List,
    /// Save a named coordinate.
    Save {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    /// Delete a saved location by id.
    Delete { id: i64 },
}

impl Cli {
    pub async fn run(self, mut state: AppState) -> Result<()> {
        match self.command {
            Command::Forecast {
                latitude,
                longitude,
            } => {
                show_forecast(
                    &state,
                    Coordinate {
                        latitude,
                        longitude,
                    },
                )
                .await
            }
            Command::Saved { name } => show_saved(&state, &name).await,
            Command::Locations(cmd) => run_locations(&state, cmd).await,
            Command::Theme { theme } => run_theme(&mut state, theme),
        }
    }
}

/// Run the forecast pipeline and print the card rows.
///
/// Upstream failures are logged and abort the cycle; no partial rows are
/// printed.
async fn show_forecast(state: &AppState, coord: Coordinate) -> Result<()> {
    let (station, rows) = match state.refresh_forecast(coord).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Error fetching weather data: {e}");
            return Ok(());
        }
    };

    match (&station.city, &station.state) {
        (Some(city), Some(st)) => println!("Forecast near {city}, {st}\n"),
        _ => println!(
            "Forecast for {:.4}, {:.4}\n",
            coord.latitude, coord.longitude
        ),
    }
    print_rows(&rows);
    Ok(())
}

async fn show_saved(state: &AppState, name: &str) -> Result<()> {
    let Some(identity) = require_identity(state).await else {
        return Ok(());
    };

    let locations = state.locations.list_for(&identity.user_id).await?;
    let Some(location) = locations
        .iter()
        .find(|l| l.location_name.eq_ignore_ascii_case(name))
    else {
        println!("No saved location named '{name}'");
        return Ok(());
    };

    show_forecast(
        state,
        Coordinate {
            latitude: location.latitude,
            longitude: location.longitude,
        },
    )
    .await
}

async fn run_locations(state: &AppState, cmd: LocationsCommand) -> Result<()> {
    let Some(identity) = require_identity(state).await else {
        return Ok(());
    };

    match cmd {
        LocationsCommand::List => {
            let locations = state.locations.list_for(&identity.user_id).await?;
            if locations.is_empty() {
                println!("No saved locations yet");
                return Ok(());
            }
            for location in locations {
                println!(
                    "#{:<4} {:<20} {:>9.4}, {:>9.4}  (saved {})",
                    location.id,
                    location.location_name,
                    location.latitude,
                    location.longitude,
                    location.created_at.format("%Y-%m-%d")
                );
            }
        }
        LocationsCommand::Save {
            name,
            latitude,
            longitude,
        } => {
            let saved = state
                .locations
                .save(&identity.user_id, &name, latitude, longitude)
                .await?;
            println!("Saved '{}' as #{}", saved.location_name, saved.id);
        }
        LocationsCommand::Delete { id } => {
            state.locations.delete(id).await?;
            println!("Deleted #{id}");
        }
    }
    Ok(())
}

fn run_theme(state: &mut AppState, theme: Option<Theme>) -> Result<()> {
    match theme {
        Some(theme) => {
            state.prefs.set_theme(theme)?;
            println!("Theme set to {theme}");
        }
        None => println!("{}", state.prefs.theme()),
    }
    Ok(())
}

/// Check sign-in state; a missing identity hides the saved-locations
/// surface entirely.
async fn require_identity(state: &AppState) -> Option<UserIdentity> {
    match state.session.refresh().await {
        Ok(Some(identity)) => {
            println!("Signed in as {}\n", identity.user_id);
            Some(identity)
        }
        Ok(None) => {
            println!("Not signed in");
            None
        }
        Err(e) => {
            tracing::error!("Error checking login status: {e}");
            println!("Error checking login status");
            None
        }
    }
}

fn print_rows(rows: &ForecastRows) {
    if rows.is_empty() {
        println!("No forecast periods in the next 24 hours");
        return;
    }
    for row in [&rows.first, &rows.second] {
        for card in row {
            println!(
                "{:<9} {:<22} {:<28} {}",
                card.time_label, card.icon, card.condition, card.temperature
            );
        }
        if !row.is_empty() {
            println!();
        }
    }
}
