use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Success body of the feedback endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 200,
            message: message.into(),
            data,
        }
    }
}

/// Body for locally detected errors (wrong verb, bad JSON, failed validation)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body for failures of the token exchange or ticket creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpstreamErrorBody {
    pub success: bool,
    #[schema(value_type = Object)]
    pub error: Value,
}

impl UpstreamErrorBody {
    pub fn new(error: Value) -> Self {
        Self {
            success: false,
            error,
        }
    }
}
