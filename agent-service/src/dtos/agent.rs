use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status marker returned for every accepted event.
pub const ACKNOWLEDGED: &str = "acknowledged";

/// Context update observed by the extension in the host's interface.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AgentEvent {
    #[validate(length(min = 1, message = "event must not be empty"))]
    pub event: String,
    pub context: String,
    /// Caller-supplied; the format is not checked.
    pub timestamp: String,
}

/// Request to produce a reply for the given context.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AgentAction {
    #[validate(length(min = 1, message = "action must not be empty"))]
    pub action: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAck {
    pub status: String,
    pub event: String,
}

impl EventAck {
    pub fn acknowledged(event: impl Into<String>) -> Self {
        Self {
            status: ACKNOWLEDGED.to_string(),
            event: event.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
}

/// Length of a context in characters rather than bytes.
pub fn context_len(context: &str) -> usize {
    context.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_event_label_fails_validation() {
        let event = AgentEvent {
            event: String::new(),
            context: "anything".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
        };
        assert!(event.validate().is_err());
    }

    #[test]
    fn empty_context_is_accepted() {
        let action = AgentAction {
            action: "draft_reply".into(),
            context: String::new(),
        };
        assert!(action.validate().is_ok());
    }

    #[test]
    fn unparseable_timestamp_is_accepted() {
        let event: AgentEvent = serde_json::from_str(
            r#"{"event":"page_view","context":"","timestamp":"yesterday-ish"}"#,
        )
        .unwrap();
        assert!(event.validate().is_ok());
        assert_eq!(event.timestamp, "yesterday-ish");
    }

    #[test]
    fn context_length_counts_characters() {
        assert_eq!(context_len("Listing #42 viewed"), 18);
        assert_eq!(context_len("héllo 🏠"), 7);
    }

    #[test]
    fn ack_serializes_to_wire_shape() {
        let json = serde_json::to_value(EventAck::acknowledged("page_view")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "acknowledged", "event": "page_view"})
        );
    }
}
