use axum::{extract::State, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

use crate::startup::AppState;

/// `GET /`: banner kept for clients of the first-generation backend.
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "Host Genie backend running" }))
}

/// Liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "agent-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus exposition, when a recorder was installed at startup.
pub async fn metrics(State(state): State<AppState>) -> Result<String, AppError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Metrics recorder not installed")))
}
