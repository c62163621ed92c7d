use utoipa::{Modify, OpenApi};

use crate::features::feedback::{dtos as feedback_dtos, handlers as feedback_handlers};
use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers};
use crate::shared::types::{ApiResponse, ErrorBody, UpstreamErrorBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Feedback (public)
        feedback_handlers::submit_feedback,
        // Tickets (public)
        tickets_handlers::create_ticket,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            UpstreamErrorBody,
            // Feedback
            feedback_dtos::FeedbackForm,
            feedback_dtos::FeedbackSubmission,
            feedback_dtos::FeedbackRecordDto,
            ApiResponse<feedback_dtos::FeedbackRecordDto>,
            // Tickets
            tickets_dtos::CreateTicketDto,
            tickets_dtos::CreateTicketContactDto,
            tickets_dtos::TicketCreatedDto,
        )
    ),
    tags(
        (name = "feedback", description = "Feedback form submissions filed as Zoho Desk tickets (public)"),
        (name = "tickets", description = "Direct Zoho Desk ticket creation (public)"),
    ),
    info(
        title = "Feedback Desk API",
        version = "0.1.0",
        description = "Feedback intake forwarding to Zoho Desk",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
