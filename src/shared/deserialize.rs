use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through, numbers become their decimal text, anything else is absent.
///
/// Used with `#[serde(default, deserialize_with = "...")]` so one badly typed field
/// never fails the whole body.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
