use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::FEEDBACK_TOPICS;

lazy_static! {
    /// Simple email shape: local@domain.tld
    /// - Valid: "jane@example.com", "a.b+c@mail.co.in"
    /// - Invalid: "jane@example", "@example.com", "jane doe@example.com"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// WhatsApp number: ASCII digits only
    pub static ref WHATSAPP_NUMBER_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();

    /// WhatsApp country code: optional leading plus, then ASCII digits
    /// - Valid: "+91", "91", "+1"
    /// - Invalid: "+", "++91", "91-", "+९१"
    pub static ref COUNTRY_CODE_REGEX: Regex = Regex::new(r"^\+?[0-9]+$").unwrap();

    /// Exact match against one of the allowed feedback topics
    pub static ref FEEDBACK_TOPIC_REGEX: Regex = Regex::new(&format!(
        "^(?:{})$",
        FEEDBACK_TOPICS
            .iter()
            .map(|topic| regex::escape(topic))
            .collect::<Vec<_>>()
            .join("|")
    ))
    .unwrap();
}
