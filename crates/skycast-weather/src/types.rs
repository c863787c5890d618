use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Geographic point selected by the user.
///
/// Immutable once produced; a new selection is a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Temperature unit reported by the forecast provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    F,
    C,
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureUnit::F => f.write_str("F"),
            TemperatureUnit::C => f.write_str("C"),
        }
    }
}

/// One hourly forecast window from the provider.
///
/// The start time keeps the offset the provider reports so card labels can
/// show the location's local clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub start_time: DateTime<FixedOffset>,
    pub short_forecast: String,
    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,
}

/// Result of the points lookup: where the hourly data lives, plus optional
/// human-readable context when the provider supplies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationInfo {
    /// URL of the hourly forecast for the resolved gridpoint
    pub forecast_hourly: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub radar_station: Option<String>,
}

/// Forecast pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The provider answered with a non-success status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),
}
