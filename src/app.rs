use anyhow::{Context, Result};
use chrono::Utc;

use skycast_auth::{AuthGate, Session};
use skycast_core::Preferences;
use skycast_locations::LocationClient;
use skycast_weather::{cards, window, Coordinate, ForecastRows, NwsClient, StationInfo};

/// Shared state handed to every command handler.
///
/// Replaces the scattered module-level globals of earlier dashboard
/// iterations with one explicit object built in `main`.
pub struct AppState {
    pub prefs: Preferences,
    pub weather: NwsClient,
    pub locations: LocationClient,
    pub session: Session,
}

impl AppState {
    pub fn new(prefs: Preferences) -> Result<Self> {
        let config = prefs.config();

        let weather = NwsClient::with_base_url(
            &config.weather.points_base_url,
            config.weather.user_agent(),
        )
        .context("Failed to build weather client")?;

        let locations = LocationClient::new(&config.services.locations_api_url)
            .context("Failed to build location store client")?;

        let session = Session::new(
            AuthGate::new(&config.services.auth_base_url)
                .context("Failed to build auth gate")?,
        );

        Ok(Self {
            prefs,
            weather,
            locations,
            session,
        })
    }

    /// The full per-action pipeline, awaited sequentially: resolve the
    /// gridpoint, fetch its hourly periods, keep the next 24 hours, shape
    /// the card rows. Nothing is retried.
    pub async fn refresh_forecast(
        &self,
        coord: Coordinate,
    ) -> Result<(StationInfo, ForecastRows), skycast_weather::WeatherError> {
        let station = self.weather.resolve_station(coord).await?;
        let periods = self.weather.fetch_hourly(&station.forecast_hourly).await?;
        let upcoming = window::next_24_hours(periods, Utc::now());
        Ok((station, cards::render(&upcoming)))
    }
}
