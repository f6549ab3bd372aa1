use serde::Deserialize;
use validator::Validate;

/// Request shape of the first-generation `/generate-reply` endpoint.
///
/// `provider` and `api_key` selected a hosted model; they are accepted for
/// compatibility and otherwise ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuestMessageRequest {
    #[serde(default)]
    pub guest_message: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl GuestMessageRequest {
    /// The guest message, if present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.guest_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_fields_are_read() {
        let req: GuestMessageRequest = serde_json::from_str(
            r#"{"guestMessage":"What time is check-in?","provider":"openai","apiKey":"sk-test"}"#,
        )
        .unwrap();
        assert_eq!(req.message(), Some("What time is check-in?"));
        assert_eq!(req.provider.as_deref(), Some("openai"));
    }

    #[test]
    fn blank_message_counts_as_missing() {
        let req: GuestMessageRequest = serde_json::from_str(r#"{"guestMessage":"   "}"#).unwrap();
        assert_eq!(req.message(), None);
    }
}
