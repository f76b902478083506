use super::*;

#[test]
fn message_start_decodes_input_tokens() {
    let raw = r#"{"type":"message_start","message":{"id":"msg_1","role":"assistant","model":"claude","content":[],"usage":{"input_tokens":12,"output_tokens":0}}}"#;
    let event: SseEvent = serde_json::from_str(raw).unwrap();
    match event {
        SseEvent::MessageStart { message } => assert_eq!(message.usage.input_tokens, 12),
        _ => panic!("expected message_start"),
    }
}

#[test]
fn content_block_start_decodes_tool_use() {
    let raw = r#"{"type":"content_block_start","index":1,"content_block":{"type":"tool_use","id":"t1","name":"get_time","input":{}}}"#;
    let event: SseEvent = serde_json::from_str(raw).unwrap();
    match event {
        SseEvent::ContentBlockStart { index, content_block: ContentBlockStart::ToolUse { id, name } } => {
            assert_eq!(index, 1);
            assert_eq!(id, "t1");
            assert_eq!(name, "get_time");
        }
        _ => panic!("expected tool_use content_block_start"),
    }
}

#[test]
fn content_block_delta_decodes_input_json_delta() {
    let raw = r#"{"type":"content_block_delta","index":0,"delta":{"type":"input_json_delta","partial_json":"{\"x\":"}}"#;
    let event: SseEvent = serde_json::from_str(raw).unwrap();
    match event {
        SseEvent::ContentBlockDelta { delta: ContentBlockDelta::InputJsonDelta { partial_json }, .. } => {
            assert_eq!(partial_json, "{\"x\":");
        }
        _ => panic!("expected input_json_delta"),
    }
}
