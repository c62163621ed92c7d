use std::sync::Arc;

use axum::{routing::post, Router};

use crate::core::middleware::{method_not_allowed, preflight};
use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/api/create-ticket",
            post(handlers::create_ticket)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}
