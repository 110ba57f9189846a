//! Reply normalization.
//!
//! Automation backends answer in whatever shape their last node produced:
//! `{ "response": "..." }`, `{ "output": "..." }`, an array of items, a bare
//! string, or something else entirely. This module reduces any of those to
//! the single string shown in the chat bubble.

use serde_json::Value;

const RESPONSE_FIELD: &str = "response";
const OUTPUT_FIELD: &str = "output";

/// Largest magnitude at which every whole `f64` is exactly an integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Reduce an upstream payload to a display string.
///
/// Candidates are tried in order:
///
/// 1. top-level `response` when it is a string
/// 2. top-level `output` when it is a non-empty string
/// 3. the first array element's `response`, then its `output`, when a string
///
/// Only the first matching rule is considered. If it produced nothing (or an
/// empty string), the payload itself is returned when it is a JSON string,
/// otherwise its compact JSON serialization. Whole-number floats are written
/// as integers (`1.0` becomes `1`), matching what JavaScript backends print.
pub fn normalize_reply(payload: &Value) -> String {
    match select_candidate(payload) {
        Some(reply) if !reply.is_empty() => reply.to_string(),
        _ => stringify(payload),
    }
}

fn select_candidate(payload: &Value) -> Option<&str> {
    match payload {
        Value::Object(map) => {
            if let Some(Value::String(response)) = map.get(RESPONSE_FIELD) {
                return Some(response.as_str());
            }
            match map.get(OUTPUT_FIELD) {
                Some(Value::String(output)) if !output.is_empty() => Some(output.as_str()),
                _ => None,
            }
        }
        Value::Array(items) => {
            let first = items.first()?;
            first
                .get(RESPONSE_FIELD)
                .and_then(Value::as_str)
                .or_else(|| first.get(OUTPUT_FIELD).and_then(Value::as_str))
        }
        _ => None,
    }
}

fn stringify(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        other => integral_floats(other).to_string(),
    }
}

/// Rewrite whole-number floats within ±2^53 as integers, recursively.
fn integral_floats(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_floats(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
