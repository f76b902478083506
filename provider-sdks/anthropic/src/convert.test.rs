use super::*;
use ivo_protocol::AuthType;
use ivo_protocol::ProviderKind;
use ivo_protocol::ThinkingConfig;
use ivo_protocol::ToolCall;

fn config(prompt_caching: bool) -> ProviderConfig {
    ProviderConfig {
        provider_kind: ProviderKind::Anthropic,
        base_url: "https://api.anthropic.com".to_string(),
        api_key: Some("sk-ant-api-1".to_string()),
        auth_type: AuthType::ApiKey,
        model: "claude-sonnet".to_string(),
        prompt_caching,
        extended_thinking: None,
    }
}

#[test]
fn system_prompt_is_plain_string_without_caching() {
    let request = build_request(&config(false), Some("be terse"), &[], &[], 1024);
    match request.system {
        SystemPrompt::Plain(text) => assert_eq!(text, "be terse"),
        _ => panic!("expected plain system prompt"),
    }
}

#[test]
fn system_prompt_is_cached_block_with_caching_enabled() {
    let request = build_request(&config(true), Some("be terse"), &[], &[], 1024);
    match request.system {
        SystemPrompt::Cached([block]) => assert_eq!(block.text, "be terse"),
        _ => panic!("expected cached system prompt"),
    }
}

#[test]
fn only_the_last_tool_gets_cache_control() {
    let tools = vec![
        ToolDefinition::full("a", "", serde_json::json!({})),
        ToolDefinition::full("b", "", serde_json::json!({})),
    ];
    let request = build_request(&config(true), None, &[], &tools, 1024);
    assert!(request.tools[0].cache_control.is_none());
    assert!(request.tools[1].cache_control.is_some());
}

#[test]
fn extended_thinking_is_included_when_configured() {
    let mut cfg = config(false);
    cfg.extended_thinking = Some(ThinkingConfig::new(2048));
    let request = build_request(&cfg, None, &[], &[], 1024);
    assert_eq!(request.thinking.unwrap().budget_tokens, 2048);
}

#[test]
fn assistant_message_carries_text_and_tool_use_blocks() {
    let messages = vec![{
        let mut m = Message::assistant_text("thinking aloud");
        m.tool_calls = vec![ToolCall::new("t1", "get_time", "{}")];
        m
    }];
    let remapped = remap_messages(&messages);
    assert_eq!(remapped.len(), 1);
    assert_eq!(remapped[0].content.len(), 2);
}

#[test]
fn consecutive_tool_results_merge_into_one_user_message() {
    let messages = vec![Message::tool_result("t1", "a"), Message::tool_result("t2", "b")];
    let remapped = remap_messages(&messages);
    assert_eq!(remapped.len(), 1);
    assert_eq!(remapped[0].role, "user");
    assert_eq!(remapped[0].content.len(), 2);
}

#[test]
fn tool_result_followed_by_user_text_does_not_merge() {
    let messages = vec![Message::tool_result("t1", "a"), Message::user("next question")];
    let remapped = remap_messages(&messages);
    assert_eq!(remapped.len(), 2);
}
