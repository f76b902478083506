//! The already-resolved provider configuration the agent loop is handed.
//!
//! Credential and model resolution themselves are an out-of-scope
//! collaborator; this crate only describes the shape of the resolved
//! value C2/C3 are constructed from.

use serde::Deserialize;
use serde::Serialize;

/// Which wire format a provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

/// How the resolved API key should be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    ApiKey,
    Oauth,
}

/// Anthropic extended-thinking configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingConfig {
    pub budget_tokens: u32,
}

impl ThinkingConfig {
    /// Anthropic requires a budget of at least 1024 tokens.
    pub const MIN_BUDGET_TOKENS: u32 = 1024;

    pub fn new(budget_tokens: u32) -> Self {
        Self {
            budget_tokens: budget_tokens.max(Self::MIN_BUDGET_TOKENS),
        }
    }
}

/// Everything the provider client and agent loop need to open a stream,
/// already resolved by the out-of-scope configuration collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider_kind: ProviderKind,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub auth_type: AuthType,
    pub model: String,
    #[serde(default)]
    pub prompt_caching: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_thinking: Option<ThinkingConfig>,
}

impl ProviderConfig {
    /// Anthropic OAuth access tokens are distinguished by this prefix.
    pub const OAUTH_TOKEN_PREFIX: &'static str = "sk-ant-oat";

    pub fn is_oauth_token(token: &str) -> bool {
        token.starts_with(Self::OAUTH_TOKEN_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oauth_token_prefix_detection() {
        assert!(ProviderConfig::is_oauth_token("sk-ant-oat01-abc"));
        assert!(!ProviderConfig::is_oauth_token("sk-ant-api01-abc"));
    }

    #[test]
    fn thinking_config_enforces_minimum_budget() {
        assert_eq!(ThinkingConfig::new(10).budget_tokens, 1024);
        assert_eq!(ThinkingConfig::new(4096).budget_tokens, 4096);
    }
}
