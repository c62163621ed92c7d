#[cfg(test)]
use crate::core::config::ZohoConfig;

#[cfg(test)]
use axum::Router;

/// Local HTTP server standing in for a Zoho endpoint
#[cfg(test)]
pub struct StubServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

#[cfg(test)]
impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve `router` on an ephemeral localhost port
#[cfg(test)]
pub async fn spawn_stub(router: Router) -> StubServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{}", addr),
        handle,
    }
}

#[cfg(test)]
pub fn test_zoho_config(accounts_host: &str, desk_host: &str) -> ZohoConfig {
    ZohoConfig {
        accounts_host: accounts_host.to_string(),
        desk_host: desk_host.to_string(),
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        refresh_token: "test-refresh-token".to_string(),
        org_id: "test-org-id".to_string(),
        department_id: "test-department-id".to_string(),
    }
}

#[cfg(test)]
pub fn test_config(accounts_host: &str, desk_host: &str) -> crate::core::config::Config {
    use crate::core::config::{AppConfig, Config, SwaggerConfig};

    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origin: "*".to_string(),
        },
        swagger: SwaggerConfig {
            username: None,
            password: None,
            title: "Feedback Desk API".to_string(),
            version: "0.1.0".to_string(),
            description: "Test".to_string(),
        },
        zoho: test_zoho_config(accounts_host, desk_host),
    }
}

/// Fake Zoho Accounts + Desk on one port, recording what it receives
#[cfg(test)]
pub struct ZohoStub {
    pub server: StubServer,
    pub token_calls: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    pub ticket_calls: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    /// Authorization header and JSON body of the last ticket request
    pub last_ticket: std::sync::Arc<std::sync::Mutex<Option<(String, serde_json::Value)>>>,
}

#[cfg(test)]
impl ZohoStub {
    pub fn token_calls(&self) -> usize {
        self.token_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn ticket_calls(&self) -> usize {
        self.ticket_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn last_ticket(&self) -> Option<(String, serde_json::Value)> {
        self.last_ticket.lock().unwrap().clone()
    }
}

/// Token endpoint always hands out access token "T"; the ticket endpoint
/// answers with `ticket_status` and `ticket_body`.
#[cfg(test)]
pub async fn spawn_zoho_stub(
    ticket_status: axum::http::StatusCode,
    ticket_body: serde_json::Value,
) -> ZohoStub {
    use axum::{http::HeaderMap, routing::post, Json};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    let token_calls = Arc::new(AtomicUsize::new(0));
    let ticket_calls = Arc::new(AtomicUsize::new(0));
    let last_ticket = Arc::new(Mutex::new(None));

    let router = Router::new()
        .route(
            "/oauth/v2/token",
            post({
                let token_calls = Arc::clone(&token_calls);
                move || async move {
                    token_calls.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "access_token": "T", "expires_in": 3600 }))
                }
            }),
        )
        .route(
            "/api/v1/tickets",
            post({
                let ticket_calls = Arc::clone(&ticket_calls);
                let last_ticket = Arc::clone(&last_ticket);
                move |headers: HeaderMap, Json(body): Json<Value>| async move {
                    ticket_calls.fetch_add(1, Ordering::SeqCst);
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *last_ticket.lock().unwrap() = Some((auth, body));
                    (ticket_status, Json(ticket_body))
                }
            }),
        );

    ZohoStub {
        server: spawn_stub(router).await,
        token_calls,
        ticket_calls,
        last_ticket,
    }
}
