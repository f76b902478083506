use super::*;

fn decode(payload: &str, state: &mut AnthropicStreamState) -> Vec<StreamChunk> {
    let event: SseEvent = serde_json::from_str(payload).unwrap();
    apply_event(event, state)
}

#[test]
fn message_start_sets_input_tokens_without_emitting_a_chunk() {
    let mut state = AnthropicStreamState::new();
    let out = decode(r#"{"type":"message_start","message":{"usage":{"input_tokens":12}}}"#, &mut state);
    assert!(out.is_empty());
    assert_eq!(state.input_tokens, 12);
}

#[test]
fn text_block_streams_deltas_and_closes_cleanly() {
    let mut state = AnthropicStreamState::new();
    let open = decode(r#"{"type":"content_block_start","index":0,"content_block":{"type":"text","text":""}}"#, &mut state);
    assert!(open.is_empty());

    let delta = decode(r#"{"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hi"}}"#, &mut state);
    assert_eq!(delta, vec![StreamChunk::TextDelta("Hi".to_string())]);

    let stop = decode(r#"{"type":"content_block_stop","index":0}"#, &mut state);
    assert!(stop.is_empty());
}

#[test]
fn thinking_block_streams_thinking_deltas() {
    let mut state = AnthropicStreamState::new();
    decode(
        r#"{"type":"content_block_start","index":0,"content_block":{"type":"thinking","thinking":""}}"#,
        &mut state,
    );
    let delta = decode(
        r#"{"type":"content_block_delta","index":0,"delta":{"type":"thinking_delta","thinking":"hmm"}}"#,
        &mut state,
    );
    assert_eq!(delta, vec![StreamChunk::ThinkingDelta("hmm".to_string())]);
}

#[test]
fn tool_use_block_accumulates_input_json_and_emits_on_stop() {
    let mut state = AnthropicStreamState::new();
    decode(
        r#"{"type":"content_block_start","index":1,"content_block":{"type":"tool_use","id":"t1","name":"get_time"}}"#,
        &mut state,
    );
    let during = decode(
        r#"{"type":"content_block_delta","index":1,"delta":{"type":"input_json_delta","partial_json":"{\"x\":"}}"#,
        &mut state,
    );
    assert!(during.is_empty());
    decode(
        r#"{"type":"content_block_delta","index":1,"delta":{"type":"input_json_delta","partial_json":"1}"}}"#,
        &mut state,
    );
    let stop = decode(r#"{"type":"content_block_stop","index":1}"#, &mut state);
    assert_eq!(stop, vec![StreamChunk::ToolCall(ToolCall::new("t1", "get_time", r#"{"x":1}"#))]);
}

#[test]
fn tool_use_with_no_input_defaults_to_empty_object() {
    let mut state = AnthropicStreamState::new();
    decode(
        r#"{"type":"content_block_start","index":0,"content_block":{"type":"tool_use","id":"t1","name":"get_time"}}"#,
        &mut state,
    );
    let stop = decode(r#"{"type":"content_block_stop","index":0}"#, &mut state);
    assert_eq!(stop, vec![StreamChunk::ToolCall(ToolCall::new("t1", "get_time", "{}"))]);
}

#[test]
fn message_stop_combines_input_and_output_usage() {
    let mut state = AnthropicStreamState::new();
    decode(r#"{"type":"message_start","message":{"usage":{"input_tokens":5}}}"#, &mut state);
    decode(r#"{"type":"message_delta","delta":{},"usage":{"output_tokens":3}}"#, &mut state);
    let stop = decode(r#"{"type":"message_stop"}"#, &mut state);
    assert_eq!(stop, vec![StreamChunk::Usage(TokenUsage::new(5, 3))]);
}

#[test]
fn error_event_becomes_error_chunk() {
    let mut state = AnthropicStreamState::new();
    let out = decode(r#"{"type":"error","error":{"message":"overloaded"}}"#, &mut state);
    assert_eq!(out, vec![StreamChunk::Error("overloaded".to_string())]);
}

#[test]
fn ping_event_is_ignored() {
    let mut state = AnthropicStreamState::new();
    let out = decode(r#"{"type":"ping"}"#, &mut state);
    assert!(out.is_empty());
}

#[test]
fn drain_events_splits_on_blank_line_and_keeps_partial_tail() {
    let mut buffer = "event: a\ndata: {}\n\nevent: b\ndata: {}\n\npartial".to_string();
    let events = drain_events(&mut buffer);
    assert_eq!(events.len(), 2);
    assert_eq!(buffer, "partial");
}

#[test]
fn extract_data_payload_accepts_both_space_and_no_space_forms() {
    assert_eq!(extract_data_payload("event: x\ndata: {\"a\":1}"), Some("{\"a\":1}"));
    assert_eq!(extract_data_payload("event: x\ndata:{\"a\":1}"), Some("{\"a\":1}"));
}
