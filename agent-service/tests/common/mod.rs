//! Test helpers for agent-service integration tests.

#![allow(dead_code)]

use agent_service::config::AgentConfig;
use agent_service::services::{MemoryActivityLog, StubReplyGenerator};
use agent_service::startup::{build_router, AppState, Application};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;

/// Short enough to keep the suite fast, long enough to measure.
pub const TEST_DELAY: Duration = Duration::from_millis(200);

pub fn test_config(delay: Duration) -> AgentConfig {
    let mut config = AgentConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0; // Random port
    config.generator.delay_ms = delay.as_millis() as u64;
    config
}

/// In-process router with an inspectable activity log.
pub struct TestRouter {
    pub router: Router,
    pub activity: Arc<MemoryActivityLog>,
}

impl TestRouter {
    pub fn new(delay: Duration) -> Self {
        Self::with_config(test_config(delay))
    }

    pub fn with_config(config: AgentConfig) -> Self {
        let activity = Arc::new(MemoryActivityLog::new());
        let state = AppState {
            generator: Arc::new(StubReplyGenerator::new(config.generator.delay())),
            activity: activity.clone(),
            metrics: None,
        };
        Self {
            router: build_router(state, &config),
            activity,
        }
    }
}

/// A server bound to a random local port.
pub struct TestApp {
    pub address: String,
    pub activity: Arc<MemoryActivityLog>,
}

impl TestApp {
    pub async fn spawn(delay: Duration) -> TestApp {
        let config = test_config(delay);
        let activity = Arc::new(MemoryActivityLog::new());
        let state = AppState {
            generator: Arc::new(StubReplyGenerator::new(config.generator.delay())),
            activity: activity.clone(),
            metrics: None,
        };

        let app = Application::build_with_state(config, state)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        TestApp { address, activity }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}
