//! Streaming and agent-loop event vocabulary.

use crate::message::Message;
use crate::message::ToolCall;
use crate::tool::ToolOutput;
use crate::usage::TokenUsage;

/// One normalized delta out of a provider stream (C2's output).
#[derive(Debug, Clone, PartialEq)]
pub enum StreamChunk {
    TextDelta(String),
    ThinkingDelta(String),
    ToolCall(ToolCall),
    Usage(TokenUsage),
    Error(String),
}

/// A tagged event emitted by the agent loop (C3) over the course of one
/// `agent_loop` invocation. `TurnEnd` is emitted exactly once per call.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentEvent {
    StreamStart,
    TextDelta(String),
    ThinkingDelta(String),
    ThinkingEnd,
    TextEnd,
    ToolCallStart { call: ToolCall },
    ToolCallEnd { call: ToolCall },
    ToolExecutionStart { call_id: String, name: String },
    ToolExecutionEnd { call_id: String, name: String, output: ToolOutput },
    MessageEnd { message: Message, usage: TokenUsage },
    TurnEnd { message: Message, usage: TokenUsage },
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_end_carries_final_message_and_usage() {
        let event = AgentEvent::TurnEnd {
            message: Message::assistant_text("done"),
            usage: TokenUsage::new(10, 2),
        };
        match event {
            AgentEvent::TurnEnd { message, usage } => {
                assert_eq!(message.content, "done");
                assert_eq!(usage.total, 12);
            }
            _ => panic!("expected TurnEnd"),
        }
    }
}
