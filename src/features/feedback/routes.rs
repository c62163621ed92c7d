use std::sync::Arc;

use axum::{routing::post, Router};

use crate::core::middleware::{method_not_allowed, preflight};
use crate::features::feedback::handlers;
use crate::features::feedback::services::FeedbackService;

/// Create routes for the feedback feature
///
/// Note: This feature is public (no authentication required). Any verb other
/// than POST or OPTIONS is answered with 405.
pub fn routes(service: Arc<FeedbackService>) -> Router {
    Router::new()
        .route(
            "/api/feedback",
            post(handlers::submit_feedback)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}
