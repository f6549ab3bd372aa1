pub mod activity;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use activity::{ActivityLog, ActivityRecord, MemoryActivityLog, TracingActivityLog};
pub use providers::{GenerationError, ReplyGenerator, StubReplyGenerator, STUB_REPLY};
