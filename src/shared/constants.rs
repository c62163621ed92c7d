/// Topics a feedback submission may be filed under
pub const FEEDBACK_TOPICS: [&str; 4] = [
    "Feature Request",
    "Quality of Response",
    "Accuracy of response",
    "Other",
];

// =============================================================================
// VALIDATION MESSAGES
// =============================================================================

pub const MSG_NAME_REQUIRED: &str = "Name is required.";
pub const MSG_EMAIL_INVALID: &str = "Valid email is required.";
pub const MSG_WHATSAPP_NUMBER_INVALID: &str = "WhatsApp number must contain digits only.";
pub const MSG_WHATSAPP_COUNTRY_CODE_INVALID: &str =
    "WhatsApp country code must be digits (optional leading +).";
/// Must stay equal to the topics above joined by ", "
pub const MSG_FEEDBACK_TOPIC_INVALID: &str =
    "Feedback topic must be one of: Feature Request, Quality of Response, Accuracy of response, Other";
pub const MSG_FEEDBACK_MESSAGE_REQUIRED: &str = "Feedback message is required.";

pub const MSG_MISSING_TICKET_FIELDS: &str = "Missing required fields: subject and contact.email";

pub const MSG_INVALID_JSON: &str = "Invalid JSON";
pub const MSG_FEEDBACK_SUBMITTED: &str = "Feedback Submitted Successfully";

// =============================================================================
// RESPONSE ENVELOPE MARKERS
// =============================================================================

pub const FEEDBACK_STATUS_NEW: &str = "new";
pub const RESPONSE_STATUS_NOT_REPLIED: &str = "not_replied";
