use serde::Deserialize;
use service_core::config::{self as core_config, ServerConfig};
use service_core::error::AppError;
use std::time::Duration;

/// Latency imposed by the stub generator, standing in for an inference call.
const DEFAULT_GENERATION_DELAY_MS: u64 = 2_000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    DEFAULT_GENERATION_DELAY_MS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_GENERATION_DELAY_MS,
        }
    }
}

impl GeneratorConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API with credentials, e.g.
    /// `chrome-extension://<extension-id>`. Empty means any origin, no credentials.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestConfig {
    /// Cap on request body size in bytes. Unset means no cap, so a context of
    /// any length is accepted.
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// OTLP collector for span export; unset disables export.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

impl AgentConfig {
    pub fn load() -> Result<Self, AppError> {
        core_config::load(&["cors.allowed_origins"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_extension_expectations() {
        let config = AgentConfig::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.generator.delay(), Duration::from_secs(2));
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.log.level, "info");
        assert!(config.log.otlp_endpoint.is_none());
        assert!(config.request.max_body_bytes.is_none());
    }

    #[test]
    fn partial_documents_keep_remaining_defaults() {
        let config: AgentConfig = serde_json::from_str(
            r#"{"generator": {"delay_ms": 10}, "cors": {"allowed_origins": ["chrome-extension://abc"]}, "request": {"max_body_bytes": 1024}}"#,
        )
        .unwrap();
        assert_eq!(config.request.max_body_bytes, Some(1024));
        assert_eq!(config.generator.delay(), Duration::from_millis(10));
        assert_eq!(config.cors.allowed_origins, vec!["chrome-extension://abc"]);
        assert_eq!(config.server.port, 3001);
    }
}
