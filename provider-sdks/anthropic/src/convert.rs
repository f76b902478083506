//! Conversion from the shared conversation vocabulary into Anthropic's
//! content-block message shape (§4.2).

use crate::types::CacheControl;
use crate::types::MessagesRequest;
use crate::types::SystemBlock;
use crate::types::SystemPrompt;
use crate::types::ThinkingRequest;
use crate::types::WireContentBlock;
use crate::types::WireMessage;
use crate::types::WireTool;
use ivo_protocol::Message;
use ivo_protocol::ProviderConfig;
use ivo_protocol::Role;
use ivo_protocol::ToolDefinition;

pub fn build_request(
    config: &ProviderConfig,
    system_prompt: Option<&str>,
    messages: &[Message],
    tools: &[ToolDefinition],
    max_tokens: u32,
) -> MessagesRequest {
    MessagesRequest {
        model: config.model.clone(),
        max_tokens,
        system: build_system(system_prompt.unwrap_or_default(), config.prompt_caching),
        messages: remap_messages(messages),
        tools: build_tools(tools, config.prompt_caching),
        stream: true,
        thinking: config.extended_thinking.map(|thinking| ThinkingRequest {
            kind: "enabled",
            budget_tokens: thinking.budget_tokens,
        }),
    }
}

fn build_system(text: &str, prompt_caching: bool) -> SystemPrompt {
    if prompt_caching {
        SystemPrompt::Cached([SystemBlock {
            kind: "text",
            text: text.to_string(),
            cache_control: CacheControl::ephemeral(),
        }])
    } else {
        SystemPrompt::Plain(text.to_string())
    }
}

/// Only the last tool gets a cache-control marker -- Anthropic allows at
/// most four cache-control blocks per request, so marking every tool
/// would blow the budget the system prompt's own marker already uses.
fn build_tools(tools: &[ToolDefinition], prompt_caching: bool) -> Vec<WireTool> {
    let last_index = tools.len().saturating_sub(1);
    tools
        .iter()
        .enumerate()
        .map(|(index, definition)| WireTool {
            name: definition.name.clone(),
            description: definition.description.clone(),
            input_schema: definition.parameter_schema.clone(),
            cache_control: if prompt_caching && !tools.is_empty() && index == last_index {
                Some(CacheControl::ephemeral())
            } else {
                None
            },
        })
        .collect()
}

/// Remap the wire-agnostic message list into Anthropic's shape: assistant
/// messages become content blocks (text and/or `tool_use`); tool
/// messages become `tool_result` blocks inside a **user** message, with
/// consecutive tool results merged into one user message.
fn remap_messages(messages: &[Message]) -> Vec<WireMessage> {
    let mut out: Vec<WireMessage> = Vec::new();
    for message in messages {
        match message.role {
            Role::System => continue,
            Role::User => out.push(WireMessage {
                role: "user",
                content: vec![WireContentBlock::Text {
                    text: message.content.clone(),
                }],
            }),
            Role::Assistant => {
                let mut content = Vec::new();
                if !message.content.is_empty() {
                    content.push(WireContentBlock::Text {
                        text: message.content.clone(),
                    });
                }
                for call in &message.tool_calls {
                    content.push(WireContentBlock::ToolUse {
                        id: call.id.clone(),
                        name: call.name.clone(),
                        input: call.parsed_arguments(),
                    });
                }
                out.push(WireMessage { role: "assistant", content });
            }
            Role::Tool => {
                let block = WireContentBlock::ToolResult {
                    tool_use_id: message.tool_call_id.clone().unwrap_or_default(),
                    content: message.content.clone(),
                };
                match out.last_mut() {
                    Some(WireMessage { role: "user", content }) if is_tool_result_message(content) => {
                        content.push(block);
                    }
                    _ => out.push(WireMessage {
                        role: "user",
                        content: vec![block],
                    }),
                }
            }
        }
    }
    out
}

fn is_tool_result_message(content: &[WireContentBlock]) -> bool {
    !content.is_empty() && content.iter().all(|block| matches!(block, WireContentBlock::ToolResult { .. }))
}

#[cfg(test)]
#[path = "convert.test.rs"]
mod tests;
