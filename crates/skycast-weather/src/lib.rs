//! Forecast retrieval and card shaping for skycast.
//!
//! The reusable pipeline behind the dashboard: two-step weather.gov lookup
//! (points metadata, then hourly periods), a 24-hour window filter, and the
//! renderer that turns periods into two rows of display cards.

pub mod cards;
pub mod client;
pub mod icons;
pub mod types;
pub mod window;

pub use cards::{render, ForecastCard, ForecastRows};
pub use client::NwsClient;
pub use types::{Coordinate, ForecastPeriod, StationInfo, TemperatureUnit, WeatherError};
pub use window::next_24_hours;
