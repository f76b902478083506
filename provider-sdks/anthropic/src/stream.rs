//! SSE decoding for the Anthropic Messages stream (§4.2).
//!
//! Each decoded [`crate::types::SseEvent`] is translated into zero or
//! more normalized [`StreamChunk`]s against a small piece of per-stream
//! state: the open content block kind (so `content_block_delta` knows
//! whether it is routing a text, thinking, or tool-input delta) and the
//! running input/output token counts (`message_start`/`message_delta`
//! arrive separately; `message_stop` combines them into one `usage`
//! chunk).

use crate::types::ContentBlockDelta;
use crate::types::ContentBlockStart;
use crate::types::SseEvent;
use ivo_protocol::StreamChunk;
use ivo_protocol::TokenUsage;
use ivo_protocol::ToolCall;

/// Which kind of content block is open at a given `index`, and its
/// accumulated payload.
#[derive(Debug, Clone)]
enum OpenBlock {
    Text,
    Thinking,
    ToolUse { id: String, name: String, input_json: String },
}

/// Per-stream state threaded through successive [`decode_event`] calls.
#[derive(Debug, Default)]
pub struct AnthropicStreamState {
    blocks: std::collections::BTreeMap<usize, OpenBlock>,
    input_tokens: u64,
    output_tokens: u64,
}

impl AnthropicStreamState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Decode one already-deserialized SSE event into zero or more
/// normalized [`StreamChunk`]s, mutating `state` along the way.
pub fn apply_event(event: SseEvent, state: &mut AnthropicStreamState) -> Vec<StreamChunk> {
    match event {
        SseEvent::MessageStart { message } => {
            state.input_tokens = message.usage.input_tokens;
            Vec::new()
        }
        SseEvent::ContentBlockStart { index, content_block } => {
            let block = match content_block {
                ContentBlockStart::Text { .. } => OpenBlock::Text,
                ContentBlockStart::Thinking { .. } => OpenBlock::Thinking,
                ContentBlockStart::ToolUse { id, name } => OpenBlock::ToolUse {
                    id,
                    name,
                    input_json: String::new(),
                },
            };
            state.blocks.insert(index, block);
            Vec::new()
        }
        SseEvent::ContentBlockDelta { index, delta } => match delta {
            ContentBlockDelta::TextDelta { text } => vec![StreamChunk::TextDelta(text)],
            ContentBlockDelta::ThinkingDelta { thinking } => vec![StreamChunk::ThinkingDelta(thinking)],
            ContentBlockDelta::InputJsonDelta { partial_json } => {
                if let Some(OpenBlock::ToolUse { input_json, .. }) = state.blocks.get_mut(&index) {
                    input_json.push_str(&partial_json);
                }
                Vec::new()
            }
            ContentBlockDelta::SignatureDelta { .. } => Vec::new(),
        },
        SseEvent::ContentBlockStop { index } => {
            match state.blocks.remove(&index) {
                Some(OpenBlock::ToolUse { id, name, input_json }) => {
                    let arguments = if input_json.is_empty() { "{}".to_string() } else { input_json };
                    vec![StreamChunk::ToolCall(ToolCall::new(id, name, arguments))]
                }
                _ => Vec::new(),
            }
        }
        SseEvent::MessageDelta { usage, .. } => {
            if let Some(usage) = usage {
                state.output_tokens = usage.output_tokens;
            }
            Vec::new()
        }
        SseEvent::MessageStop {} => {
            vec![StreamChunk::Usage(TokenUsage::new(state.input_tokens, state.output_tokens))]
        }
        SseEvent::Error { error } => vec![StreamChunk::Error(error.message)],
        SseEvent::Ping {} => Vec::new(),
    }
}

/// Split a growing SSE byte buffer into complete `\n\n`-terminated
/// events, returning the decoded lines and leaving any trailing partial
/// event in `buffer`.
pub fn drain_events(buffer: &mut String) -> Vec<String> {
    let mut events = Vec::new();
    while let Some(pos) = buffer.find("\n\n") {
        let event = buffer[..pos].to_string();
        *buffer = buffer[pos + 2..].to_string();
        events.push(event);
    }
    events
}

/// Extract the payload from one SSE event's `data:` line. Accepts both
/// `data: ` and `data:` (no space) per §9's open question on the
/// source's inconsistency. The event's own `type` field (not the SSE
/// `event:` line) is what `SseEvent`'s tagged deserialization keys off.
pub fn extract_data_payload(event: &str) -> Option<&str> {
    for line in event.lines() {
        if let Some(rest) = line.strip_prefix("data: ").or_else(|| line.strip_prefix("data:")) {
            let payload = rest.trim();
            if !payload.is_empty() {
                return Some(payload);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "stream.test.rs"]
mod tests;
