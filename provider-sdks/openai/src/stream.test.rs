use super::*;

#[test]
fn text_delta_chunk_decodes_to_text_delta() {
    let mut acc = ToolCallAccumulator::new();
    let out = decode_event(r#"{"choices":[{"delta":{"content":"Hi"}}]}"#, &mut acc);
    assert_eq!(out, vec![StreamChunk::TextDelta("Hi".to_string())]);
}

#[test]
fn tool_call_accumulates_across_frames_and_flushes_on_finish() {
    let mut acc = ToolCallAccumulator::new();
    let first = decode_event(
        r#"{"choices":[{"delta":{"tool_calls":[{"index":0,"id":"t1","function":{"name":"get_time","arguments":""}}]}}]}"#,
        &mut acc,
    );
    assert!(first.is_empty());

    let second = decode_event(
        r#"{"choices":[{"delta":{"tool_calls":[{"index":0,"function":{"arguments":"{}"}}]}}]}"#,
        &mut acc,
    );
    assert!(second.is_empty());

    let third = decode_event(r#"{"choices":[{"delta":{},"finish_reason":"tool_calls"}]}"#, &mut acc);
    assert_eq!(
        third,
        vec![StreamChunk::ToolCall(ToolCall::new("t1", "get_time", "{}"))]
    );
}

#[test]
fn usage_chunk_with_empty_choices_decodes_to_usage() {
    let mut acc = ToolCallAccumulator::new();
    let out = decode_event(
        r#"{"choices":[],"usage":{"prompt_tokens":5,"completion_tokens":2,"total_tokens":7}}"#,
        &mut acc,
    );
    assert_eq!(out, vec![StreamChunk::Usage(TokenUsage::new(5, 2))]);
}

#[test]
fn malformed_json_produces_error_chunk() {
    let mut acc = ToolCallAccumulator::new();
    let out = decode_event("{not json", &mut acc);
    assert_eq!(out.len(), 1);
    assert!(matches!(out[0], StreamChunk::Error(_)));
}

#[test]
fn drain_events_splits_on_blank_line_and_keeps_trailing_partial() {
    let mut buffer = "data: a\n\ndata: b\n\ndata: c".to_string();
    let events = drain_events(&mut buffer);
    assert_eq!(events, vec!["data: a", "data: b"]);
    assert_eq!(buffer, "data: c");
}

#[test]
fn extract_data_payload_accepts_both_colon_forms() {
    assert_eq!(extract_data_payload("data: {\"a\":1}"), Some("{\"a\":1}"));
    assert_eq!(extract_data_payload("data:{\"a\":1}"), Some("{\"a\":1}"));
}

#[test]
fn extract_data_payload_recognizes_done_terminator() {
    assert_eq!(extract_data_payload("data: [DONE]"), None);
}
