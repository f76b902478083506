use super::*;
use ivo_protocol::AuthType;

fn unreachable_config(kind: ProviderKind) -> ProviderConfig {
    ProviderConfig {
        provider_kind: kind,
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: Some("test".to_string()),
        auth_type: AuthType::ApiKey,
        model: "test-model".to_string(),
        prompt_caching: false,
        extended_thinking: None,
    }
}

#[tokio::test]
async fn routes_openai_provider_kind_through_the_openai_adapter() {
    let client = InferenceClient::new();
    let result = client
        .stream(
            &unreachable_config(ProviderKind::OpenAi),
            &[Message::user("hi")],
            &[],
            &StreamOptions::default(),
            CancellationToken::new(),
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn routes_anthropic_provider_kind_through_the_anthropic_adapter() {
    let client = InferenceClient::new();
    let result = client
        .stream(
            &unreachable_config(ProviderKind::Anthropic),
            &[Message::user("hi")],
            &[],
            &StreamOptions {
                system_prompt: Some("be helpful".to_string()),
            },
            CancellationToken::new(),
        )
        .await;
    assert!(result.is_err());
}
