use axum::http::StatusCode;
use serde_json::Value;

use crate::core::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ZohoError {
    #[error("Request to Zoho {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Zoho {service} responded with HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: Value,
    },

    /// 2xx response that does not carry what we asked for
    #[error("Unexpected response from Zoho {service}: {body}")]
    Malformed { service: &'static str, body: Value },
}

impl ZohoError {
    /// Wrap a reqwest failure. The URL is dropped since the token request carries credentials in its query.
    pub fn transport(service: &'static str, source: reqwest::Error) -> Self {
        ZohoError::Transport {
            service,
            source: source.without_url(),
        }
    }

    /// Build a `Status` error from a non-2xx response, keeping the payload as JSON when it is JSON.
    pub async fn from_response(service: &'static str, response: reqwest::Response) -> Self {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

        ZohoError::Status {
            service,
            status,
            body,
        }
    }
}

impl From<ZohoError> for AppError {
    fn from(err: ZohoError) -> Self {
        match err {
            ZohoError::Transport { source, .. } => AppError::Upstream {
                status: source.status(),
                body: Value::String(source.to_string()),
            },
            ZohoError::Status { status, body, .. } => AppError::Upstream {
                status: Some(status),
                body,
            },
            ZohoError::Malformed { body, .. } => AppError::Upstream { status: None, body },
        }
    }
}
