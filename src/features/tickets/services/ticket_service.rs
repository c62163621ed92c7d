use std::sync::Arc;

use serde_json::Value;

use crate::core::error::Result;
use crate::features::tickets::dtos::CreateTicketDto;
use crate::features::zoho::{ZohoDeskClient, ZohoTokenClient};

/// Service for creating Zoho Desk tickets from caller-supplied fields
pub struct TicketService {
    token_client: Arc<ZohoTokenClient>,
    desk_client: Arc<ZohoDeskClient>,
}

impl TicketService {
    pub fn new(token_client: Arc<ZohoTokenClient>, desk_client: Arc<ZohoDeskClient>) -> Self {
        Self {
            token_client,
            desk_client,
        }
    }

    /// Validate, exchange the refresh token, then create the ticket
    pub async fn create(&self, dto: CreateTicketDto) -> Result<Value> {
        let ticket = dto.into_ticket(self.desk_client.department_id())?;

        let access_token = self.token_client.get_access_token().await?;
        let created = self.desk_client.create_ticket(&access_token, &ticket).await?;

        Ok(created)
    }
}
