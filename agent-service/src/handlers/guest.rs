//! First-generation reply endpoint taking a raw guest message.

use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

use super::agent::run_generator;
use crate::dtos::{GuestMessageRequest, ReplyResponse};
use crate::services::prompt::compose_host_prompt;
use crate::startup::AppState;

/// `POST /generate-reply`
pub async fn generate_guest_reply(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<GuestMessageRequest>,
) -> Result<Json<ReplyResponse>, AppError> {
    let message = req
        .message()
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("guestMessage is required")))?;

    if req.provider.is_some() || req.api_key.is_some() {
        tracing::debug!("Ignoring provider selection; hosted models are not wired in");
    }

    let prompt = compose_host_prompt(message);
    let reply = run_generator(&state, &prompt).await?;

    Ok(Json(ReplyResponse { reply }))
}
