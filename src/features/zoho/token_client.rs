use serde_json::Value;
use std::sync::Arc;

use crate::core::config::ZohoConfig;
use crate::features::zoho::error::ZohoError;

const SERVICE: &str = "Accounts";

/// Exchanges the configured refresh token for a short-lived access token.
///
/// A fresh token is requested for every call; nothing is cached.
pub struct ZohoTokenClient {
    config: Arc<ZohoConfig>,
    client: reqwest::Client,
    token_url: String,
}

impl ZohoTokenClient {
    pub fn new(config: Arc<ZohoConfig>, client: reqwest::Client) -> Self {
        let token_url = config.token_url();
        Self {
            config,
            client,
            token_url,
        }
    }

    pub async fn get_access_token(&self) -> Result<String, ZohoError> {
        tracing::debug!("Fetching Zoho access token from {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .query(&[
                ("refresh_token", self.config.refresh_token.as_str()),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|source| ZohoError::transport(SERVICE, source))?;

        if !response.status().is_success() {
            return Err(ZohoError::from_response(SERVICE, response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|source| ZohoError::transport(SERVICE, source))?;

        // Zoho reports a rejected refresh token as 200 with {"error": "..."}
        match body.get("access_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {
                tracing::debug!("Obtained Zoho access token");
                Ok(token.to_string())
            }
            _ => Err(ZohoError::Malformed {
                service: SERVICE,
                body,
            }),
        }
    }
}
