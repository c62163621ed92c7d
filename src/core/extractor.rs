use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;

use crate::core::error::AppError;
use crate::shared::constants::MSG_INVALID_JSON;

/// Inbound body as the client sent it: either text still to be parsed as JSON,
/// or an already structured JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionBody {
    RawText(String),
    Structured(Value),
}

impl SubmissionBody {
    /// Resolve to a single JSON value. Text that is not valid JSON is rejected.
    pub fn into_value(self) -> Result<Value, AppError> {
        match self {
            SubmissionBody::RawText(text) => serde_json::from_str(&text)
                .map_err(|_| AppError::BadRequest(MSG_INVALID_JSON.to_string())),
            SubmissionBody::Structured(value) => Ok(value),
        }
    }
}

fn is_json_content_type(req: &Request<Body>) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

impl<S> FromRequest<S> for SubmissionBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(&req);

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Failed to read request body: {}", rejection);
            AppError::BadRequest(MSG_INVALID_JSON.to_string())
        })?;

        if is_json {
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(SubmissionBody::Structured(Value::Null));
            }

            return match serde_json::from_slice::<Value>(&bytes) {
                // JSON-encoded text still needs its own parse
                Ok(Value::String(text)) => Ok(SubmissionBody::RawText(text)),
                Ok(value) => Ok(SubmissionBody::Structured(value)),
                Err(_) => Err(AppError::BadRequest(MSG_INVALID_JSON.to_string())),
            };
        }

        String::from_utf8(bytes.to_vec())
            .map(SubmissionBody::RawText)
            .map_err(|_| AppError::BadRequest(MSG_INVALID_JSON.to_string()))
    }
}
