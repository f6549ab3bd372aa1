//! Reply generation backends.
//!
//! The service layer depends only on [`ReplyGenerator`]; the stub is the
//! default backend and a real inference client can be swapped in behind the
//! same trait.

pub mod stub;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

pub use stub::{StubReplyGenerator, STUB_REPLY};

/// Error type for generation backends.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    #[error("Generator backend error: {0}")]
    Backend(String),

    #[error("Rate limited")]
    RateLimited { retry_after_secs: Option<u64> },
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::RateLimited { retry_after_secs } => {
                AppError::TooManyRequests(err.to_string(), retry_after_secs)
            }
            other => AppError::BadGateway(other.to_string()),
        }
    }
}

/// Produces reply text for a context.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generate a reply for `context`.
    async fn generate(&self, context: &str) -> Result<String, GenerationError>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}
