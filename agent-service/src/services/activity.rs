//! Per-request activity records.
//!
//! Handlers report what they received through an [`ActivityLog`] held in the
//! application state instead of writing to a global logger, so tests can
//! inspect the records directly.

use crate::dtos::agent::{context_len, AgentAction, AgentEvent};
use std::sync::Mutex;

/// Tracing target for activity records.
pub const ACTIVITY_TARGET: &str = "agent_service::activity";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityRecord {
    EventReceived {
        event: String,
        context_len: usize,
        timestamp: String,
    },
    ActionRequested {
        action: String,
        context_len: usize,
    },
}

impl ActivityRecord {
    pub fn from_event(event: &AgentEvent) -> Self {
        ActivityRecord::EventReceived {
            event: event.event.clone(),
            context_len: context_len(&event.context),
            timestamp: event.timestamp.clone(),
        }
    }

    pub fn from_action(action: &AgentAction) -> Self {
        ActivityRecord::ActionRequested {
            action: action.action.clone(),
            context_len: context_len(&action.context),
        }
    }
}

pub trait ActivityLog: Send + Sync {
    fn record(&self, record: ActivityRecord);

    fn event_received(&self, event: &AgentEvent) {
        self.record(ActivityRecord::from_event(event));
    }

    fn action_requested(&self, action: &AgentAction) {
        self.record(ActivityRecord::from_action(action));
    }
}

/// Writes each record as one `INFO` event through `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn record(&self, record: ActivityRecord) {
        match record {
            ActivityRecord::EventReceived {
                event,
                context_len,
                timestamp,
            } => tracing::info!(
                target: ACTIVITY_TARGET,
                event = %event,
                context_len,
                timestamp = %timestamp,
                "Received Event: {} | Context Length: {} chars | Timestamp: {}",
                event,
                context_len,
                timestamp
            ),
            ActivityRecord::ActionRequested {
                action,
                context_len,
            } => tracing::info!(
                target: ACTIVITY_TARGET,
                action = %action,
                context_len,
                "Action Requested: {} | Context Length: {} chars",
                action,
                context_len
            ),
        }
    }
}

/// Keeps records in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    records: Mutex<Vec<ActivityRecord>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ActivityRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ActivityLog for MemoryActivityLog {
    fn record(&self, record: ActivityRecord) {
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
