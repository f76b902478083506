use super::*;

#[test]
fn assistant_tool_call_message_omits_content() {
    let message = WireMessage {
        role: "assistant",
        content: None,
        tool_calls: Some(vec![WireToolCall {
            id: "call_1".to_string(),
            kind: "function",
            function: WireFunctionCall {
                name: "get_time".to_string(),
                arguments: "{}".to_string(),
            },
        }]),
        tool_call_id: None,
        name: None,
    };
    let value = serde_json::to_value(&message).unwrap();
    assert!(value.get("content").is_none());
    assert!(value.get("tool_calls").is_some());
}

#[test]
fn tool_message_carries_only_id_and_content() {
    let message = WireMessage {
        role: "tool",
        content: Some("12:00".to_string()),
        tool_calls: None,
        tool_call_id: Some("call_1".to_string()),
        name: None,
    };
    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(value["content"], "12:00");
    assert_eq!(value["tool_call_id"], "call_1");
    assert!(value.get("tool_calls").is_none());
}

#[test]
fn chunk_decodes_partial_tool_call_delta() {
    let raw = r#"{"choices":[{"delta":{"tool_calls":[{"index":0,"id":"call_1","function":{"name":"get_time","arguments":""}}]}}]}"#;
    let chunk: ChatCompletionChunk = serde_json::from_str(raw).unwrap();
    let tool_call = &chunk.choices[0].delta.tool_calls.as_ref().unwrap()[0];
    assert_eq!(tool_call.id.as_deref(), Some("call_1"));
}

#[test]
fn chunk_decodes_usage() {
    let raw = r#"{"choices":[],"usage":{"prompt_tokens":5,"completion_tokens":2,"total_tokens":7}}"#;
    let chunk: ChatCompletionChunk = serde_json::from_str(raw).unwrap();
    assert_eq!(chunk.usage.unwrap().total_tokens, 7);
}
