use super::*;
use ivo_protocol::ToolCall;

#[test]
fn assistant_message_with_tool_calls_drops_content() {
    let message = Message::assistant_tool_calls(vec![ToolCall::new("1", "bash", "{}")]);
    let wire = to_wire_message(&message);
    assert!(wire.content.is_none());
    assert_eq!(wire.tool_calls.unwrap().len(), 1);
}

#[test]
fn tool_message_carries_call_id_and_content_only() {
    let message = Message::tool_result("1", "ok");
    let wire = to_wire_message(&message);
    assert_eq!(wire.tool_call_id.as_deref(), Some("1"));
    assert_eq!(wire.content.as_deref(), Some("ok"));
    assert!(wire.tool_calls.is_none());
}

#[test]
fn tool_definition_schema_is_sanitized() {
    let definition = ToolDefinition::full(
        "bash",
        "run a command",
        serde_json::json!({"type": "object", "$schema": "x", "additionalProperties": false}),
    );
    let wire = to_wire_tool(&definition);
    assert!(wire.function.parameters.get("$schema").is_none());
    assert!(wire.function.parameters.get("additionalProperties").is_none());
}

#[test]
fn build_request_sets_streaming_usage_options() {
    let request = build_request("gpt-4o", &[Message::user("hi")], &[]);
    assert!(request.stream);
    assert!(request.stream_options.include_usage);
    assert_eq!(request.messages.len(), 1);
}
