//! Endpoints called by the browser extension's background bridge.

use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;
use std::time::Instant;

use crate::dtos::{AgentAction, AgentEvent, EventAck, ReplyResponse};
use crate::services::metrics;
use crate::startup::AppState;

/// `POST /agent/events`: record a context update and acknowledge it.
pub async fn submit_event(
    State(state): State<AppState>,
    ValidatedJson(event): ValidatedJson<AgentEvent>,
) -> Json<EventAck> {
    state.activity.event_received(&event);
    metrics::record_event_received();

    Json(EventAck::acknowledged(event.event))
}

/// `POST /agent/generate-reply`: run the generator on the action's context.
pub async fn generate_reply(
    State(state): State<AppState>,
    ValidatedJson(action): ValidatedJson<AgentAction>,
) -> Result<Json<ReplyResponse>, AppError> {
    state.activity.action_requested(&action);

    let reply = run_generator(&state, &action.context).await?;

    Ok(Json(ReplyResponse { reply }))
}

pub(crate) async fn run_generator(state: &AppState, context: &str) -> Result<String, AppError> {
    let generator = state.generator.name();
    let start = Instant::now();

    match state.generator.generate(context).await {
        Ok(reply) => {
            metrics::record_generation(generator, "ok", start.elapsed());
            Ok(reply)
        }
        Err(e) => {
            metrics::record_generation(generator, "error", start.elapsed());
            tracing::error!(generator, error = %e, "Reply generation failed");
            Err(e.into())
        }
    }
}
