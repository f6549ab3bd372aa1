//! Application startup and lifecycle management.

use crate::config::AgentConfig;
use crate::handlers::{agent, guest, health};
use crate::services::{ActivityLog, ReplyGenerator, StubReplyGenerator, TracingActivityLog};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::cors_layer, metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use service_core::observability::PrometheusHandle;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ReplyGenerator>,
    pub activity: Arc<dyn ActivityLog>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Stub generator with the configured delay and tracing-backed activity log.
    pub fn from_config(config: &AgentConfig) -> Self {
        Self {
            generator: Arc::new(StubReplyGenerator::new(config.generator.delay())),
            activity: Arc::new(TracingActivityLog),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

fn body_limit(config: &AgentConfig) -> DefaultBodyLimit {
    match config.request.max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    }
}

pub fn build_router(state: AppState, config: &AgentConfig) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        .route("/agent/events", post(agent::submit_event))
        .route("/agent/generate-reply", post(agent::generate_reply))
        .route("/generate-reply", post(guest::generate_guest_reply))
        .with_state(state)
        .layer(body_limit(config))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors_layer(&config.cors.allowed_origins))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the default stub generator.
    pub async fn build(config: AgentConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config);
        Self::build_with_state(config, state).await
    }

    /// Build the application around caller-supplied components.
    pub async fn build_with_state(config: AgentConfig, state: AppState) -> Result<Self, AppError> {
        tracing::info!(
            generator = state.generator.name(),
            delay_ms = config.generator.delay_ms,
            "Initialized reply generator"
        );

        if config.cors.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS allows any origin without credentials; set cors.allowed_origins for deployment"
            );
        } else {
            tracing::info!(origins = ?config.cors.allowed_origins, "CORS restricted to allow-list");
        }

        // Port 0 = random port for testing
        let address = config.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Agent service listening on port {}", port);

        let router = build_router(state, &config);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
