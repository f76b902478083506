//! Predicates over [`Message`] used by the agent loop to keep the
//! conversation's ordering invariant intact.

use ivo_protocol::Message;
use ivo_protocol::Role;

pub fn is_tool_message(message: &Message) -> bool {
    message.role == Role::Tool
}

pub fn is_assistant_with_tool_calls(message: &Message) -> bool {
    message.role == Role::Assistant && message.has_tool_calls()
}

pub fn is_assistant_text(message: &Message) -> bool {
    message.role == Role::Assistant && !message.has_tool_calls()
}

/// Collect the `tool_call_id`s an assistant message is still waiting on.
pub fn pending_tool_call_ids(message: &Message) -> Vec<&str> {
    message.tool_calls.iter().map(|call| call.id.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivo_protocol::ToolCall;

    #[test]
    fn classifies_assistant_with_tool_calls() {
        let message = Message::assistant_tool_calls(vec![ToolCall::new("1", "bash", "{}")]);
        assert!(is_assistant_with_tool_calls(&message));
        assert!(!is_assistant_text(&message));
    }

    #[test]
    fn classifies_tool_message() {
        let message = Message::tool_result("1", "ok");
        assert!(is_tool_message(&message));
    }
}
