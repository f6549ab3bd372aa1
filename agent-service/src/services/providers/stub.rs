//! Fixed-latency placeholder generator.

use super::{GenerationError, ReplyGenerator};
use async_trait::async_trait;
use std::time::Duration;

/// Canned reply returned regardless of context.
pub const STUB_REPLY: &str = "Hello! I've analyzed the listing and the guest's message. \
Based on your current pricing and the guest's inquiry about weekend availability, \
I suggest offering a small 5% discount if they book for 3 nights. \
\n\nSuggested Reply: 'Hi! Thanks for reaching out. We'd love to host you. \
Since you're looking at a weekend stay, I can offer a special rate if you extend to Monday!'";

/// Waits `delay`, then returns [`STUB_REPLY`]. Never fails.
#[derive(Debug, Clone)]
pub struct StubReplyGenerator {
    delay: Duration,
}

impl StubReplyGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ReplyGenerator for StubReplyGenerator {
    async fn generate(&self, _context: &str) -> Result<String, GenerationError> {
        // Dropping the future (client gone) cancels the sleep.
        tokio::time::sleep(self.delay).await;
        Ok(STUB_REPLY.to_string())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
