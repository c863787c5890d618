//! Card shaping: filtered periods in, presentation data out.
//!
//! Nothing here touches a display surface; the dashboard glue decides how
//! the rows are drawn.

use crate::icons;
use crate::types::{ForecastPeriod, TemperatureUnit};

/// Maximum cards per row.
pub const ROW_LEN: usize = 12;

/// Presentation data for a single hourly card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    /// Local clock label in the period's own offset, e.g. "02:00 PM"
    pub time_label: String,
    pub icon: &'static str,
    pub condition: String,
    pub temperature: String,
}

/// Two ordered rows of at most [`ROW_LEN`] cards each.
#[derive(Debug, Clone, Default)]
pub struct ForecastRows {
    pub first: Vec<ForecastCard>,
    pub second: Vec<ForecastCard>,
}

impl ForecastRows {
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }
}

/// Split the (already filtered) periods into two rows of up to twelve cards;
/// periods beyond twenty-four are dropped. Order is never changed.
pub fn render(periods: &[ForecastPeriod]) -> ForecastRows {
    ForecastRows {
        first: periods.iter().take(ROW_LEN).map(card).collect(),
        second: periods.iter().skip(ROW_LEN).take(ROW_LEN).map(card).collect(),
    }
}

fn card(period: &ForecastPeriod) -> ForecastCard {
    ForecastCard {
        time_label: period.start_time.format("%I:%M %p").to_string(),
        icon: icons::icon_for(&period.short_forecast),
        condition: period.short_forecast.clone(),
        temperature: format_temperature(period.temperature, period.temperature_unit),
    }
}

/// Fahrenheit readings carry a rounded Celsius conversion; anything else is
/// shown unconverted in its native unit.
fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::F => {
            let celsius = ((value - 32.0) * 5.0 / 9.0).round() as i64;
            format!("{value}°F ({celsius}°C)")
        }
        TemperatureUnit::C => format!("{value}°{unit}"),
    }
}
