//! Authentication and beta-header construction (§4.2).

use ivo_protocol::ProviderConfig;

const OAUTH_BETA: &str = "oauth-2025-04-20";
const PROMPT_CACHING_BETA: &str = "prompt-caching-2024-07-31";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// `(header name, value)` for the credential header -- either
    /// `authorization` (OAuth) or `x-api-key` (plain API key).
    pub credential: (&'static str, String),
    /// Comma-joined beta feature flags, if any apply.
    pub beta: Option<String>,
}

pub fn build_auth_headers(config: &ProviderConfig) -> AuthHeaders {
    let api_key = config.api_key.as_deref().unwrap_or_default();
    let is_oauth = ProviderConfig::is_oauth_token(api_key);

    let credential = if is_oauth {
        ("authorization", format!("Bearer {api_key}"))
    } else {
        ("x-api-key", api_key.to_string())
    };

    let mut betas = Vec::new();
    if is_oauth {
        betas.push(OAUTH_BETA);
    }
    if config.prompt_caching {
        betas.push(PROMPT_CACHING_BETA);
    }

    AuthHeaders {
        credential,
        beta: if betas.is_empty() { None } else { Some(betas.join(",")) },
    }
}

#[cfg(test)]
#[path = "auth.test.rs"]
mod tests;
