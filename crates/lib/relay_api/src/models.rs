//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /ask` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub success: bool,
    pub reply: String,
}

impl AskResponse {
    pub fn new(reply: String) -> Self {
        Self {
            success: true,
            reply,
        }
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    /// Upstream body or failure message, when the webhook was involved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// `GET /api/health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub webhook_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_without_detail_omits_field() {
        let body = serde_json::to_value(ErrorResponse::new("nope")).unwrap();
        assert_eq!(body, json!({ "success": false, "error": "nope" }));
    }

    #[test]
    fn error_with_detail_includes_it() {
        let body =
            serde_json::to_value(ErrorResponse::new("failed").with_detail(json!({ "code": 1 })))
                .unwrap();
        assert_eq!(
            body,
            json!({ "success": false, "error": "failed", "detail": { "code": 1 } })
        );
    }

    #[test]
    fn health_uses_camel_case() {
        let body = serde_json::to_value(HealthResponse {
            status: "ok".into(),
            version: "0.1.0".into(),
            webhook_url: "http://localhost/hook".into(),
        })
        .unwrap();
        assert_eq!(body["webhookUrl"], "http://localhost/hook");
    }
}
