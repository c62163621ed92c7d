use std::sync::Arc;

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::feedback::dtos::{
    CreatedTicket, FeedbackRecordDto, FeedbackSubmission, FeedbackTicket,
};
use crate::features::zoho::{ZohoDeskClient, ZohoTokenClient};

/// Files validated feedback as Zoho Desk tickets
pub struct FeedbackService {
    token_client: Arc<ZohoTokenClient>,
    desk_client: Arc<ZohoDeskClient>,
}

impl FeedbackService {
    pub fn new(token_client: Arc<ZohoTokenClient>, desk_client: Arc<ZohoDeskClient>) -> Self {
        Self {
            token_client,
            desk_client,
        }
    }

    /// Exchange the refresh token, then create the ticket with the fresh access token.
    pub async fn submit(&self, submission: FeedbackSubmission) -> Result<FeedbackRecordDto> {
        let access_token = self.token_client.get_access_token().await?;

        let ticket = FeedbackTicket::from_submission(&submission, self.desk_client.department_id());
        let created = self.desk_client.create_ticket(&access_token, &ticket).await?;

        let created: CreatedTicket = serde_json::from_value(created).map_err(|e| {
            AppError::Upstream {
                status: None,
                body: Value::String(format!("Invalid ticket response from Zoho Desk: {}", e)),
            }
        })?;

        tracing::info!(
            "Feedback filed: ticket_id={}, topic={}",
            created.id,
            submission.feedback_topic
        );

        Ok(FeedbackRecordDto::new(submission, created))
    }
}
