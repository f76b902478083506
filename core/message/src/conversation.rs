//! A growing, single-owner message list for one agent-loop invocation.
//!
//! Per the lifecycle rule in the data model, a [`Conversation`] is owned
//! by exactly one agent-loop call and discarded at `turn_end`; only the
//! final message and usage are externalized by the caller.

use crate::error::message_error;
use crate::error::Result;
use crate::type_guards::is_assistant_with_tool_calls;
use ivo_protocol::Message;
use ivo_protocol::Role;
use std::collections::HashSet;

/// The growing message list an agent loop turn operates over.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Seed a fresh conversation with an optional system prompt and the
    /// initial user message.
    pub fn seed(system_prompt: Option<&str>, user_message: &str) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(user_message));
        Self { messages }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// The set of `tool_call_id`s introduced by assistant messages that
    /// have not yet been answered by a tool message.
    pub fn pending_tool_call_ids(&self) -> HashSet<&str> {
        let mut pending: HashSet<&str> = HashSet::new();
        for message in &self.messages {
            if is_assistant_with_tool_calls(message) {
                for call in &message.tool_calls {
                    pending.insert(call.id.as_str());
                }
            } else if message.role == Role::Tool {
                if let Some(id) = message.tool_call_id.as_deref() {
                    pending.remove(id);
                }
            }
        }
        pending
    }

    /// Validate the ordering invariant: every tool message must match a
    /// preceding, not-yet-answered assistant tool call.
    pub fn validate_ordering(&self) -> Result<()> {
        let mut pending: HashSet<&str> = HashSet::new();
        for message in &self.messages {
            match message.role {
                Role::Assistant if message.has_tool_calls() => {
                    for call in &message.tool_calls {
                        pending.insert(call.id.as_str());
                    }
                }
                Role::Tool => {
                    let id = message.tool_call_id.as_deref().unwrap_or_default();
                    if !pending.remove(id) {
                        return message_error::DanglingToolCallIdSnafu { call_id: id }.fail();
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "conversation.test.rs"]
mod tests;
