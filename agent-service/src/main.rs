use agent_service::config::AgentConfig;
use agent_service::startup::{AppState, Application};
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AgentConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "agent-service",
        &config.log.level,
        config.log.otlp_endpoint.as_deref(),
    );

    let mut state = AppState::from_config(&config);
    match init_metrics() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => tracing::warn!("Metrics disabled: {}", e),
    }

    tracing::info!(
        "Starting Host Genie Agent Backend on {}...",
        config.server.address()
    );

    let app = Application::build_with_state(config, state)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build application: {}", e))?;

    app.run_until_stopped().await?;

    Ok(())
}
