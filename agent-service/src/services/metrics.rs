//! Agent-specific metrics, recorded through the `metrics` facade.

use metrics::{counter, histogram};
use std::time::Duration;

pub fn record_event_received() {
    counter!("agent_events_total").increment(1);
}

pub fn record_generation(generator: &'static str, outcome: &'static str, elapsed: Duration) {
    let labels = [("generator", generator), ("outcome", outcome)];
    counter!("agent_generations_total", &labels).increment(1);
    histogram!("agent_generation_duration_seconds", &labels).record(elapsed.as_secs_f64());
}
