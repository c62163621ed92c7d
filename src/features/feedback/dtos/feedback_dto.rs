use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::core::error::AppError;
use crate::features::zoho::TicketContact;
use crate::shared::constants::{
    FEEDBACK_STATUS_NEW, MSG_EMAIL_INVALID, MSG_FEEDBACK_MESSAGE_REQUIRED,
    MSG_FEEDBACK_TOPIC_INVALID, MSG_NAME_REQUIRED, MSG_WHATSAPP_COUNTRY_CODE_INVALID,
    MSG_WHATSAPP_NUMBER_INVALID, RESPONSE_STATUS_NOT_REPLIED,
};

/// Order in which fields are checked; the first failing field decides the error.
const FIELD_ORDER: [&str; 6] = [
    "name",
    "email",
    "whatsapp_number",
    "whatsapp_country_code",
    "feedback_topic",
    "feedback_message",
];

/// Feedback form as received. Every field is optional until validated.
///
/// Attribute messages must stay equal to the `MSG_*` constants in `shared::constants`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct FeedbackForm {
    #[validate(
        required(message = "Name is required."),
        length(min = 1, message = "Name is required.")
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub name: Option<String>,

    #[validate(
        required(message = "Valid email is required."),
        regex(
            path = "*crate::shared::validation::EMAIL_REGEX",
            message = "Valid email is required."
        )
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub email: Option<String>,

    #[validate(
        required(message = "WhatsApp number must contain digits only."),
        regex(
            path = "*crate::shared::validation::WHATSAPP_NUMBER_REGEX",
            message = "WhatsApp number must contain digits only."
        )
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub whatsapp_number: Option<String>,

    #[validate(
        required(message = "WhatsApp country code must be digits (optional leading +)."),
        regex(
            path = "*crate::shared::validation::COUNTRY_CODE_REGEX",
            message = "WhatsApp country code must be digits (optional leading +)."
        )
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub whatsapp_country_code: Option<String>,

    /// One of: Feature Request, Quality of Response, Accuracy of response, Other
    #[validate(
        required(
            message = "Feedback topic must be one of: Feature Request, Quality of Response, Accuracy of response, Other"
        ),
        regex(
            path = "*crate::shared::validation::FEEDBACK_TOPIC_REGEX",
            message = "Feedback topic must be one of: Feature Request, Quality of Response, Accuracy of response, Other"
        )
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub feedback_topic: Option<String>,

    #[validate(
        required(message = "Feedback message is required."),
        length(min = 1, message = "Feedback message is required.")
    )]
    #[serde(default, deserialize_with = "crate::shared::deserialize::lenient_text")]
    pub feedback_message: Option<String>,
}

impl FeedbackForm {
    /// Read a form out of any JSON value. Non-objects yield an empty form.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Validate and turn into a submission, or return the single first error.
    pub fn into_submission(self) -> Result<FeedbackSubmission, AppError> {
        self.validate()
            .map_err(|errors| AppError::Validation(first_error_message(&errors)))?;

        let missing = |msg: &str| AppError::Validation(msg.to_string());

        Ok(FeedbackSubmission {
            name: self.name.ok_or_else(|| missing(MSG_NAME_REQUIRED))?,
            email: self.email.ok_or_else(|| missing(MSG_EMAIL_INVALID))?,
            whatsapp_country_code: self
                .whatsapp_country_code
                .ok_or_else(|| missing(MSG_WHATSAPP_COUNTRY_CODE_INVALID))?,
            whatsapp_number: self
                .whatsapp_number
                .ok_or_else(|| missing(MSG_WHATSAPP_NUMBER_INVALID))?,
            feedback_topic: self
                .feedback_topic
                .ok_or_else(|| missing(MSG_FEEDBACK_TOPIC_INVALID))?,
            feedback_message: self
                .feedback_message
                .ok_or_else(|| missing(MSG_FEEDBACK_MESSAGE_REQUIRED))?,
        })
    }
}

fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// A fully validated feedback submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub whatsapp_country_code: String,
    pub whatsapp_number: String,
    pub feedback_topic: String,
    pub feedback_message: String,
}

/// Ticket sent to Zoho Desk for one feedback submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackTicket {
    pub subject: String,
    pub description: String,
    pub department_id: String,
    pub contact: TicketContact,
    pub category: String,
    pub phone: String,
}

impl FeedbackTicket {
    pub fn from_submission(submission: &FeedbackSubmission, department_id: &str) -> Self {
        Self {
            subject: format!("Feedback from {}", submission.name),
            description: submission.feedback_message.clone(),
            department_id: department_id.to_string(),
            contact: TicketContact {
                last_name: submission.name.clone(),
                email: submission.email.clone(),
            },
            category: submission.feedback_topic.clone(),
            phone: format!(
                "{} {}",
                submission.whatsapp_country_code, submission.whatsapp_number
            ),
        }
    }
}

/// The fields of Zoho's create-ticket response we carry back to the caller
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTicket {
    #[serde(deserialize_with = "ticket_id")]
    pub id: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub modified_time: Option<String>,
}

fn ticket_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "ticket id must be a string or number, got {}",
            other
        ))),
    }
}

/// Success payload: the submission plus bookkeeping fields shaped like a freshly stored record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRecordDto {
    #[serde(flatten)]
    pub submission: FeedbackSubmission,
    /// Always "new"
    pub status: String,
    /// Always "not_replied"
    pub response_status: String,
    /// Zoho Desk ticket id
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(rename = "__v")]
    pub version: u32,
}

impl FeedbackRecordDto {
    pub fn new(submission: FeedbackSubmission, ticket: CreatedTicket) -> Self {
        Self {
            submission,
            status: FEEDBACK_STATUS_NEW.to_string(),
            response_status: RESPONSE_STATUS_NOT_REPLIED.to_string(),
            id: ticket.id,
            created_at: ticket.created_time,
            updated_at: ticket.modified_time,
            version: 0,
        }
    }
}
