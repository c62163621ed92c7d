use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::config::ZohoConfig;
use crate::features::zoho::error::ZohoError;

const SERVICE: &str = "Desk";

/// Contact block of a Zoho Desk ticket
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketContact {
    pub last_name: String,
    pub email: String,
}

/// Client for the Zoho Desk ticket API
pub struct ZohoDeskClient {
    config: Arc<ZohoConfig>,
    client: reqwest::Client,
    tickets_url: String,
}

impl ZohoDeskClient {
    pub fn new(config: Arc<ZohoConfig>, client: reqwest::Client) -> Self {
        let tickets_url = config.tickets_url();
        Self {
            config,
            client,
            tickets_url,
        }
    }

    /// Department configured for this deployment
    pub fn department_id(&self) -> &str {
        &self.config.department_id
    }

    /// Create a ticket and return Zoho's JSON representation of it
    pub async fn create_ticket<T: Serialize + ?Sized>(
        &self,
        access_token: &str,
        ticket: &T,
    ) -> Result<Value, ZohoError> {
        let response = self
            .client
            .post(&self.tickets_url)
            .header("Authorization", format!("Zoho-oauthtoken {}", access_token))
            .header("orgId", &self.config.org_id)
            .json(ticket)
            .send()
            .await
            .map_err(|source| ZohoError::transport(SERVICE, source))?;

        if !response.status().is_success() {
            return Err(ZohoError::from_response(SERVICE, response).await);
        }

        let created: Value = response
            .json()
            .await
            .map_err(|source| ZohoError::transport(SERVICE, source))?;

        tracing::info!(
            "Created Zoho Desk ticket: id={}",
            created.get("id").unwrap_or(&serde_json::Value::Null)
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{spawn_stub, test_zoho_config};
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_sends_auth_and_org_headers() {
        let router = Router::new().route(
            "/api/v1/tickets",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let org = headers
                    .get("orgid")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "id": "42", "auth": auth, "org": org, "echo": body }))
            }),
        );
        let stub = spawn_stub(router).await;

        let client = ZohoDeskClient::new(
            Arc::new(test_zoho_config(&stub.base_url, &stub.base_url)),
            reqwest::Client::new(),
        );

        let created = client
            .create_ticket("T", &json!({ "subject": "Hello" }))
            .await
            .unwrap();

        assert_eq!(created["id"], "42");
        assert_eq!(created["auth"], "Zoho-oauthtoken T");
        assert_eq!(created["org"], "test-org-id");
        assert_eq!(created["echo"], json!({ "subject": "Hello" }));
    }

    #[tokio::test]
    async fn test_upstream_failure_keeps_status_and_payload() {
        let router = Router::new().route(
            "/api/v1/tickets",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "msg": "rate limited" })),
                )
            }),
        );
        let stub = spawn_stub(router).await;

        let client = ZohoDeskClient::new(
            Arc::new(test_zoho_config(&stub.base_url, &stub.base_url)),
            reqwest::Client::new(),
        );

        match client.create_ticket("T", &json!({})).await {
            Err(ZohoError::Status { status, body, .. }) => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, json!({ "msg": "rate limited" }));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
