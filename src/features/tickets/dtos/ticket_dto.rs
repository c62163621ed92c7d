use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::zoho::TicketContact;
use crate::shared::constants::MSG_MISSING_TICKET_FIELDS;

/// Contact of a directly created ticket
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketContactDto {
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub last_name: Option<String>,

    #[validate(
        required(message = "Missing required fields: subject and contact.email"),
        length(min = 1, message = "Missing required fields: subject and contact.email")
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub email: Option<String>,
}

/// Request DTO for creating a Zoho Desk ticket directly
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketDto {
    #[validate(
        required(message = "Missing required fields: subject and contact.email"),
        length(min = 1, message = "Missing required fields: subject and contact.email")
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub subject: Option<String>,

    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub description: Option<String>,

    /// Falls back to the department configured for this deployment. Numeric ids are read as text.
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub department_id: Option<String>,

    #[validate(
        required(message = "Missing required fields: subject and contact.email"),
        nested
    )]
    #[serde(default, deserialize_with = "lenient_contact")]
    pub contact: Option<CreateTicketContactDto>,
}

/// A contact that is not an object counts as missing.
fn lenient_contact<'de, D>(deserializer: D) -> Result<Option<CreateTicketContactDto>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl CreateTicketDto {
    /// Read a request out of any JSON value. Non-objects yield an empty request.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn into_ticket(self, default_department_id: &str) -> Result<DeskTicket, AppError> {
        let missing = || AppError::Validation(MSG_MISSING_TICKET_FIELDS.to_string());

        self.validate().map_err(|_| missing())?;

        let contact = self.contact.ok_or_else(missing)?;

        Ok(DeskTicket {
            subject: self.subject.ok_or_else(missing)?,
            description: self.description.unwrap_or_default(),
            department_id: self
                .department_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| default_department_id.to_string()),
            contact: TicketContact {
                last_name: contact.last_name.unwrap_or_default(),
                email: contact.email.ok_or_else(missing)?,
            },
        })
    }
}

/// Ticket forwarded to Zoho Desk as is
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskTicket {
    pub subject: String,
    pub description: String,
    pub department_id: String,
    pub contact: TicketContact,
}

/// Response DTO wrapping Zoho's ticket payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketCreatedDto {
    pub success: bool,
    #[schema(value_type = Object)]
    pub ticket: Value,
}

impl TicketCreatedDto {
    pub fn new(ticket: Value) -> Self {
        Self {
            success: true,
            ticket,
        }
    }
}
