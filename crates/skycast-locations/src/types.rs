use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-named coordinate persisted by the location store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocation {
    /// Assigned by the store on save
    pub id: i64,
    pub user_id: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

/// Location store errors.
#[derive(Debug, thiserror::Error)]
pub enum LocationStoreError {
    /// A required field was absent or empty; the request never left the
    /// process when caught locally.
    #[error("missing required field: {0}")]
    Validation(String),

    #[error("saved location {0} not found")]
    NotFound(i64),

    #[error("location store error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_location_deserialization() {
        // Row shape as the store returns it.
        let json = r#"{
            "id": 7,
            "user_id": "user-123",
            "location_name": "Home",
            "latitude": 28.6,
            "longitude": -81.3,
            "created_at": "2026-08-01T09:30:00.000Z"
        }"#;
        let loc: SavedLocation = serde_json::from_str(json).expect("parse row");
        assert_eq!(loc.id, 7);
        assert_eq!(loc.location_name, "Home");
        assert_eq!(loc.latitude, 28.6);
    }

    #[test]
    fn test_validation_error_names_the_field() {
        let err = LocationStoreError::Validation("location_name".to_string());
        assert!(err.to_string().contains("location_name"));
    }
}
