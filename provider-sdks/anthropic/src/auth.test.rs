use super::*;
use ivo_protocol::AuthType;
use ivo_protocol::ProviderKind;

fn config(api_key: &str, prompt_caching: bool) -> ProviderConfig {
    ProviderConfig {
        provider_kind: ProviderKind::Anthropic,
        base_url: "https://api.anthropic.com".to_string(),
        api_key: Some(api_key.to_string()),
        auth_type: AuthType::ApiKey,
        model: "claude-sonnet".to_string(),
        prompt_caching,
        extended_thinking: None,
    }
}

#[test]
fn plain_api_key_uses_x_api_key_header() {
    let headers = build_auth_headers(&config("sk-ant-api01-abc", false));
    assert_eq!(headers.credential.0, "x-api-key");
    assert_eq!(headers.credential.1, "sk-ant-api01-abc");
    assert!(headers.beta.is_none());
}

#[test]
fn oauth_token_uses_bearer_and_oauth_beta() {
    let headers = build_auth_headers(&config("sk-ant-oat01-abc", false));
    assert_eq!(headers.credential.0, "authorization");
    assert_eq!(headers.credential.1, "Bearer sk-ant-oat01-abc");
    assert_eq!(headers.beta.as_deref(), Some("oauth-2025-04-20"));
}

#[test]
fn prompt_caching_adds_beta_flag_for_api_key() {
    let headers = build_auth_headers(&config("sk-ant-api01-abc", true));
    assert_eq!(headers.beta.as_deref(), Some("prompt-caching-2024-07-31"));
}

#[test]
fn oauth_and_prompt_caching_betas_concatenate() {
    let headers = build_auth_headers(&config("sk-ant-oat01-abc", true));
    assert_eq!(headers.beta.as_deref(), Some("oauth-2025-04-20,prompt-caching-2024-07-31"));
}
