//! Prompt composition for guest-message replies.

const HOST_ASSISTANT_PREAMBLE: &str = "You are an Airbnb host assistant.\n\
Reply politely, clearly, and professionally.";

/// Wrap a guest message in the host-assistant instructions.
pub fn compose_host_prompt(guest_message: &str) -> String {
    format!(
        "{}\n\nGuest message:\n\"{}\"",
        HOST_ASSISTANT_PREAMBLE,
        guest_message.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_quotes_trimmed_guest_message() {
        let prompt = compose_host_prompt("  Is parking included?\n");
        assert!(prompt.starts_with("You are an Airbnb host assistant.\nReply politely"));
        assert!(prompt.ends_with("Guest message:\n\"Is parking included?\""));
    }
}
