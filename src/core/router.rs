use axum::{
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware::{self, CorsOrigin};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::feedback::{routes as feedback_routes, FeedbackService};
use crate::features::tickets::{routes as tickets_routes, TicketService};
use crate::features::zoho::{ZohoDeskClient, ZohoTokenClient};

/// Wire clients and services from `config` and assemble the full application router.
pub fn build_router(config: &Config) -> anyhow::Result<Router> {
    let zoho_config = Arc::new(config.zoho.clone());
    let http_client = reqwest::Client::new();

    let token_client = Arc::new(ZohoTokenClient::new(
        Arc::clone(&zoho_config),
        http_client.clone(),
    ));
    let desk_client = Arc::new(ZohoDeskClient::new(Arc::clone(&zoho_config), http_client));
    tracing::info!(
        "Zoho clients initialized (accounts: {}, desk: {})",
        zoho_config.accounts_host,
        zoho_config.desk_host
    );

    let feedback_service = Arc::new(FeedbackService::new(
        Arc::clone(&token_client),
        Arc::clone(&desk_client),
    ));
    let ticket_service = Arc::new(TicketService::new(token_client, desk_client));

    let cors_origin =
        Arc::new(CorsOrigin::parse(&config.app.cors_allowed_origin).map_err(anyhow::Error::msg)?);

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let public_routes = Router::new()
        .merge(feedback_routes::routes(feedback_service))
        .merge(tickets_routes::routes(ticket_service));

    let app = Router::new()
        .merge(swagger_router(config))
        .merge(public_routes)
        .merge(health_route)
        .layer(from_fn_with_state(cors_origin, middleware::cors_headers))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    Ok(app)
}

fn swagger_router(config: &Config) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi);

    if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(swagger)
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(swagger)
    }
}
