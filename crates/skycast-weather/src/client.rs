//! Client for the weather.gov forecast API.
//!
//! The lookup is two-step: a points request resolves a coordinate to its
//! gridpoint metadata (including the hourly forecast URL), then that URL is
//! fetched for the period list. The provider requires an identifying
//! User-Agent on every request. Failed calls are reported once and never
//! retried.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client};
use serde::Deserialize;
use url::Url;

use crate::types::{Coordinate, ForecastPeriod, StationInfo, WeatherError};

const NWS_BASE_URL: &str = "https://api.weather.gov";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointsProperties {
    forecast_hourly: String,
    radar_station: Option<String>,
    relative_location: Option<RelativeLocation>,
}

#[derive(Debug, Deserialize)]
struct RelativeLocation {
    properties: RelativePlace,
}

#[derive(Debug, Deserialize)]
struct RelativePlace {
    city: Option<String>,
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HourlyResponse {
    properties: HourlyProperties,
}

#[derive(Debug, Deserialize)]
struct HourlyProperties {
    periods: Vec<ForecastPeriod>,
}

/// Forecast API client.
#[derive(Debug, Clone)]
pub struct NwsClient {
    base_url: Url,
    client: Arc<Client>,
    user_agent: String,
}

impl NwsClient {
    /// Create a client against the public API.
    ///
    /// `user_agent` identifies the application and a contact, e.g.
    /// `skycast/0.1.0 (you@example.com)`.
    pub fn new(user_agent: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(NWS_BASE_URL, user_agent)
    }

    /// Create a client against a different endpoint (tests, proxies).
    pub fn with_base_url(
        base_url: &str,
        user_agent: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let base_url = Url::parse(base_url).map_err(|e| WeatherError::Parse(e.to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
            user_agent: user_agent.into(),
        })
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(header::USER_AGENT, self.user_agent.as_str())
            .header(header::ACCEPT, "application/json")
    }

    /// Resolve a coordinate to its gridpoint metadata.
    ///
    /// Returns the hourly forecast URL plus the nearest city/state and radar
    /// station when the provider includes them.
    pub async fn resolve_station(&self, coord: Coordinate) -> Result<StationInfo, WeatherError> {
        let url = self
            .base_url
            .join(&format!("points/{},{}", coord.latitude, coord.longitude))
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::debug!(%url, "resolving gridpoint");
        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: PointsResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let place = body.properties.relative_location.map(|l| l.properties);
        let info = StationInfo {
            forecast_hourly: body.properties.forecast_hourly,
            city: place.as_ref().and_then(|p| p.city.clone()),
            state: place.and_then(|p| p.state),
            radar_station: body.properties.radar_station,
        };

        tracing::info!(
            city = info.city.as_deref().unwrap_or("?"),
            state = info.state.as_deref().unwrap_or("?"),
            "gridpoint resolved"
        );
        Ok(info)
    }

    /// Fetch the hourly periods behind the URL returned by
    /// [`resolve_station`](Self::resolve_station).
    pub async fn fetch_hourly(&self, url: &str) -> Result<Vec<ForecastPeriod>, WeatherError> {
        let url = Url::parse(url).map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::debug!(%url, "fetching hourly periods");
        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: HourlyResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::debug!(periods = body.properties.periods.len(), "hourly forecast fetched");
        Ok(body.properties.periods)
    }
}
