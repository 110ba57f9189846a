//! Lenient request body extraction for `POST /ask`.
//!
//! The browser UI posts JSON, but form posts and bare `curl` calls without a
//! content type must still reach the handler so it can answer with the usual
//! `{success:false, error}` body instead of an axum rejection.

use std::collections::HashMap;

use axum::Form;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Request body as loose JSON. `Value::Null` when there was no usable body.
#[derive(Debug)]
pub struct AskPayload(pub Value);

impl<S> FromRequest<S> for AskPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/x-www-form-urlencoded" {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            let map: Map<String, Value> = fields
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            return Ok(Self(Value::Object(map)));
        }

        if !is_json(&mime) {
            return Ok(Self(Value::Null));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Null));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))
    }
}

fn is_json(mime: &str) -> bool {
    mime == "application/json" || mime.ends_with("+json")
}
