use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

use crate::shared::types::{ErrorBody, UpstreamErrorBody};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure reported by (or while talking to) Zoho. The payload is surfaced untouched.
    #[error("Upstream error ({}): {body}", .status.map(|s| s.as_u16()).unwrap_or(500))]
    Upstream {
        status: Option<StatusCode>,
        body: Value,
    },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => {
                status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::MethodNotAllowed => {
                (status, Json(ErrorBody::new("Method not allowed"))).into_response()
            }
            AppError::BadRequest(msg) | AppError::Validation(msg) => {
                (status, Json(ErrorBody::new(msg))).into_response()
            }
            AppError::Upstream { body, .. } => {
                tracing::error!("Upstream error: HTTP {} - {}", status.as_u16(), body);
                (status, Json(UpstreamErrorBody::new(body))).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
