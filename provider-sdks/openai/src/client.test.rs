use super::*;

#[test]
fn truncate_passes_through_short_bodies() {
    assert_eq!(truncate("short", 500), "short");
}

#[test]
fn truncate_clips_long_bodies() {
    let body = "x".repeat(600);
    let truncated = truncate(&body, 500);
    assert_eq!(truncated.len(), 503);
    assert!(truncated.ends_with("..."));
}

#[tokio::test]
async fn stream_surfaces_http_error_status_and_message() {
    let client = OpenAiClient::new();
    let config = ProviderConfig {
        provider_kind: ivo_protocol::ProviderKind::OpenAi,
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: Some("test".to_string()),
        auth_type: ivo_protocol::AuthType::ApiKey,
        model: "gpt-4o".to_string(),
        prompt_caching: false,
        extended_thinking: None,
    };
    let result = client
        .stream(&config, &[Message::user("hi")], &[], CancellationToken::new())
        .await;
    assert!(result.is_err());
}
