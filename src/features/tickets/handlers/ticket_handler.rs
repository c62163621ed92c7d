use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::SubmissionBody;
use crate::features::tickets::dtos::{CreateTicketDto, TicketCreatedDto};
use crate::features::tickets::services::TicketService;
use crate::shared::types::{ErrorBody, UpstreamErrorBody};

/// Create a Zoho Desk ticket directly
///
/// Forwards subject, description, department and contact to Zoho Desk and
/// returns Zoho's ticket payload unchanged.
#[utoipa::path(
    post,
    path = "/api/create-ticket",
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket created", body = TicketCreatedDto),
        (status = 400, description = "Invalid JSON or missing subject/contact.email", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Zoho token exchange or ticket creation failed; upstream status is mirrored when known", body = UpstreamErrorBody)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    body: SubmissionBody,
) -> Result<Json<TicketCreatedDto>> {
    let dto = CreateTicketDto::from_value(body.into_value()?);

    let ticket = service.create(dto).await?;
    Ok(Json(TicketCreatedDto::new(ticket)))
}
