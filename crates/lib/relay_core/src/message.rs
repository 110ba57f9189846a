//! Inbound chat message extraction.
//!
//! Browser clients send `{ "message": "..." }`; direct callers may still use
//! the legacy `{ "query": "..." }` shape. Both arrive here as loose JSON.

use serde_json::Value;

/// Field names consulted, in order.
const MESSAGE_FIELDS: [&str; 2] = ["message", "query"];

/// Extract the user's message from a request body.
///
/// `message` wins when it holds text; otherwise `query` is tried. Non-zero
/// numbers and `true` are accepted in their textual form, while `0` and
/// `false` count as absent. The text is returned as sent, without trimming.
pub fn extract_message(body: &Value) -> Option<String> {
    MESSAGE_FIELDS
        .iter()
        .find_map(|field| body.get(*field).and_then(field_text))
}

/// Returns `true` when `text` contains nothing but whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
