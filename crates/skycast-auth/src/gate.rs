use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

const AUTH_ME_PATH: &str = ".auth/me";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// The signed-in principal as the platform reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    #[serde(default, alias = "provider_name")]
    pub identity_provider: Option<String>,
    #[serde(default)]
    pub user_details: Option<String>,
}

/// Identity endpoint errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("identity endpoint returned status {status}")]
    Endpoint { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Client for the platform identity endpoint.
///
/// The endpoint answers a JSON array of signed-in principals: empty means
/// signed out, the first element is the active identity.
#[derive(Debug, Clone)]
pub struct AuthGate {
    base_url: Url,
    client: Arc<Client>,
}

impl AuthGate {
    pub fn new(base_url: &str) -> Result<Self, AuthError> {
        let base_url = Url::parse(base_url).map_err(|e| AuthError::Parse(e.to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
        })
    }

    /// Ask the platform who is signed in. `None` means nobody.
    pub async fn current_user(&self) -> Result<Option<UserIdentity>, AuthError> {
        let url = self
            .base_url
            .join(AUTH_ME_PATH)
            .map_err(|e| AuthError::Parse(e.to_string()))?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Endpoint {
                status: status.as_u16(),
            });
        }

        let principals: Vec<UserIdentity> = response
            .json()
            .await
            .map_err(|e| AuthError::Parse(e.to_string()))?;

        match principals.into_iter().next() {
            Some(identity) => {
                tracing::debug!(user_id = %identity.user_id, "signed in");
                Ok(Some(identity))
            }
            None => {
                tracing::debug!("not signed in");
                Ok(None)
            }
        }
    }
}
