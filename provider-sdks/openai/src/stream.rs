//! SSE decoding and tool-call accumulation for the `chat/completions`
//! stream (§4.2).

use crate::error::OpenAiError;
use crate::types::ChatCompletionChunk;
use crate::types::ChunkToolCall;
use ivo_protocol::StreamChunk;
use ivo_protocol::ToolCall;
use ivo_protocol::TokenUsage;
use std::collections::BTreeMap;

/// Accumulates a tool call's `name`/`arguments` across incrementally
/// indexed delta frames, per §4.2: the first frame carrying an `id`
/// opens a slot, later frames concatenate into it.
#[derive(Debug, Default)]
pub struct ToolCallAccumulator {
    slots: BTreeMap<usize, PartialToolCall>,
}

#[derive(Debug, Default, Clone)]
struct PartialToolCall {
    id: String,
    name: String,
    arguments: String,
}

impl ToolCallAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, deltas: &[ChunkToolCall]) {
        for delta in deltas {
            let slot = self.slots.entry(delta.index).or_default();
            if let Some(id) = &delta.id {
                slot.id = id.clone();
            }
            if let Some(function) = &delta.function {
                if let Some(name) = &function.name {
                    slot.name.push_str(name);
                }
                if let Some(arguments) = &function.arguments {
                    slot.arguments.push_str(arguments);
                }
            }
        }
    }

    /// Emit every accumulated tool call (arguments default to `"{}"` when
    /// empty) and clear the table.
    pub fn flush(&mut self) -> Vec<ToolCall> {
        let slots = std::mem::take(&mut self.slots);
        slots
            .into_values()
            .map(|slot| {
                let arguments = if slot.arguments.is_empty() {
                    "{}".to_string()
                } else {
                    slot.arguments
                };
                ToolCall::new(slot.id, slot.name, arguments)
            })
            .collect()
    }
}

/// Decode one already-unwrapped SSE `data: ` payload into zero or more
/// normalized [`StreamChunk`]s, mutating `acc` as tool-call deltas
/// arrive and draining it once a terminal `finish_reason` is seen.
pub fn decode_event(payload: &str, acc: &mut ToolCallAccumulator) -> Vec<StreamChunk> {
    let chunk: ChatCompletionChunk = match serde_json::from_str(payload) {
        Ok(chunk) => chunk,
        Err(err) => {
            return vec![StreamChunk::Error(
                OpenAiError::from_parse(format!("{err}: {payload}")).to_string(),
            )]
        }
    };

    let mut out = Vec::new();
    for choice in &chunk.choices {
        if let Some(content) = &choice.delta.content {
            if !content.is_empty() {
                out.push(StreamChunk::TextDelta(content.clone()));
            }
        }
        if let Some(deltas) = &choice.delta.tool_calls {
            acc.apply(deltas);
        }
        if let Some(reason) = &choice.finish_reason {
            if reason == "tool_calls" || reason == "stop" {
                for call in acc.flush() {
                    out.push(StreamChunk::ToolCall(call));
                }
            }
        }
    }

    if let Some(usage) = chunk.usage {
        out.push(StreamChunk::Usage(TokenUsage {
            input: usage.prompt_tokens,
            output: usage.completion_tokens,
            total: usage.total_tokens,
        }));
    }

    out
}

impl OpenAiError {
    fn from_parse(message: String) -> Self {
        crate::error::open_ai_error::ParseSnafu { message }.build()
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

/// Extract the payload from one SSE event's `data:` line(s). Accepts
/// both `data: ` and `data:` (no space) per the source's inconsistency
/// (§9 open questions). Returns `None` for the `[DONE]` terminator or an
/// event carrying no `data:` line.
pub fn extract_data_payload(event: &str) -> Option<&str> {
    for line in event.lines() {
        let payload = line.strip_prefix("data: ").or_else(|| line.strip_prefix("data:"));
        if let Some(payload) = payload {
            let payload = payload.trim();
            if payload == "[DONE]" {
                return None;
            }
            return Some(payload);
        }
    }
    None
}

#[cfg(test)]
#[path = "stream.test.rs"]
mod tests;
