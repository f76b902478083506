//! Conversion from the shared conversation vocabulary (`ivo-protocol`)
//! into the wire shapes this SDK sends.

use crate::sanitize::sanitize_schema;
use crate::types::ChatCompletionRequest;
use crate::types::StreamOptions;
use crate::types::WireFunctionCall;
use crate::types::WireFunctionDef;
use crate::types::WireMessage;
use crate::types::WireTool;
use crate::types::WireToolCall;
use ivo_protocol::Message;
use ivo_protocol::Role;
use ivo_protocol::ToolDefinition;

pub fn build_request(model: &str, messages: &[Message], tools: &[ToolDefinition]) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: messages.iter().map(to_wire_message).collect(),
        tools: tools.iter().map(to_wire_tool).collect(),
        stream: true,
        stream_options: StreamOptions { include_usage: true },
    }
}

fn role_str(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    }
}

fn to_wire_message(message: &Message) -> WireMessage {
    if message.role == Role::Assistant && message.has_tool_calls() {
        return WireMessage {
            role: "assistant",
            content: None,
            tool_calls: Some(
                message
                    .tool_calls
                    .iter()
                    .map(|call| WireToolCall {
                        id: call.id.clone(),
                        kind: "function",
                        function: WireFunctionCall {
                            name: call.name.clone(),
                            arguments: call.arguments_json.clone(),
                        },
                    })
                    .collect(),
            ),
            tool_call_id: None,
            name: None,
        };
    }

    if message.role == Role::Tool {
        return WireMessage {
            role: "tool",
            content: Some(message.content.clone()),
            tool_calls: None,
            tool_call_id: message.tool_call_id.clone(),
            name: None,
        };
    }

    WireMessage {
        role: role_str(message.role),
        content: Some(message.content.clone()),
        tool_calls: None,
        tool_call_id: None,
        name: message.name.clone(),
    }
}

fn to_wire_tool(definition: &ToolDefinition) -> WireTool {
    WireTool {
        kind: "function",
        function: WireFunctionDef {
            name: definition.name.clone(),
            description: definition.description.clone(),
            parameters: sanitize_schema(&definition.parameter_schema),
        },
    }
}

#[cfg(test)]
#[path = "convert.test.rs"]
mod tests;
