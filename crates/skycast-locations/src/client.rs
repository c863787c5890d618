use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{LocationStoreError, SavedLocation};

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize)]
struct SaveLocationBody<'a> {
    user_id: &'a str,
    location_name: &'a str,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct SaveLocationResponse {
    id: i64,
}

/// Client for the saved-locations store.
#[derive(Debug, Clone)]
pub struct LocationClient {
    base_url: Url,
    client: Arc<Client>,
}

impl LocationClient {
    pub fn new(base_url: &str) -> Result<Self, LocationStoreError> {
        let base_url =
            Url::parse(base_url).map_err(|e| LocationStoreError::Parse(e.to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
        })
    }

    /// Persist a named coordinate for a user.
    ///
    /// Required fields are checked before any request is issued; the store
    /// repeats the same check and answers 400, which maps to the same
    /// [`LocationStoreError::Validation`].
    pub async fn save(
        &self,
        user_id: &str,
        location_name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<SavedLocation, LocationStoreError> {
        if user_id.trim().is_empty() {
            return Err(LocationStoreError::Validation("user_id".to_string()));
        }
        if location_name.trim().is_empty() {
            return Err(LocationStoreError::Validation("location_name".to_string()));
        }

        let url = self.join("api/locations")?;
        let body = SaveLocationBody {
            user_id,
            location_name,
            latitude,
            longitude,
        };

        tracing::debug!(user_id, location_name, "saving location");
        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(LocationStoreError::Validation(
                "rejected by the store".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }

        let assigned: SaveLocationResponse = response
            .json()
            .await
            .map_err(|e| LocationStoreError::Parse(e.to_string()))?;

        tracing::info!(id = assigned.id, location_name, "location saved");
        // The store stamps created_at; the local clock stands in until the
        // next list refresh.
        Ok(SavedLocation {
            id: assigned.id,
            user_id: user_id.to_string(),
            location_name: location_name.to_string(),
            latitude,
            longitude,
            created_at: Utc::now(),
        })
    }

    /// List a user's saved locations, newest first as the store orders them.
    pub async fn list_for(&self, user_id: &str) -> Result<Vec<SavedLocation>, LocationStoreError> {
        if user_id.trim().is_empty() {
            return Err(LocationStoreError::Validation("user_id".to_string()));
        }

        let url = self.join(&format!("api/locations/{user_id}"))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }

        let locations: Vec<SavedLocation> = response
            .json()
            .await
            .map_err(|e| LocationStoreError::Parse(e.to_string()))?;

        tracing::debug!(user_id, count = locations.len(), "locations listed");
        Ok(locations)
    }

    /// Delete a saved location by id.
    pub async fn delete(&self, id: i64) -> Result<(), LocationStoreError> {
        let url = self.join(&format!("api/locations/{id}"))?;

        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LocationStoreError::NotFound(id));
        }
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }

        tracing::info!(id, "location deleted");
        Ok(())
    }

    fn join(&self, path: &str) -> Result<Url, LocationStoreError> {
        self.base_url
            .join(path)
            .map_err(|e| LocationStoreError::Parse(e.to_string()))
    }

    async fn api_error(status: StatusCode, response: reqwest::Response) -> LocationStoreError {
        let message = response.text().await.unwrap_or_default();
        LocationStoreError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
