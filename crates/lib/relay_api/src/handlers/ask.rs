//! Chat relay handler.
//!
//! `POST /ask` takes the user's message, forwards it to the webhook and
//! answers with whatever text the backend produced.

use axum::Json;
use axum::extract::State;
use relay_core::message::{extract_message, is_blank};
use relay_core::normalize::normalize_reply;
use tracing::{debug, info};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::AskPayload;
use crate::models::AskResponse;

/// Error text for a request without a usable message.
pub const EMPTY_MESSAGE: &str = "Message must not be empty.";

/// `POST /ask` — relay one chat message to the webhook.
pub async fn ask_handler(
    State(state): State<AppState>,
    AskPayload(body): AskPayload,
) -> AppResult<Json<AskResponse>> {
    let message = extract_message(&body).unwrap_or_default();
    info!(message = %message, "message received");

    if is_blank(&message) {
        return Err(AppError::Validation(EMPTY_MESSAGE.into()));
    }

    let payload = state.webhook.send(&message).await?;
    let reply = normalize_reply(&payload);
    debug!(reply_len = reply.len(), "reply normalized");

    Ok(Json(AskResponse::new(reply)))
}
