//! Unifying provider streaming facade (C2): one `stream` entry point
//! that dispatches on [`ProviderKind`] to the OpenAI-compatible or
//! Anthropic-native adapter and returns the same normalized
//! `Stream<Item = StreamChunk>` either way. No caller above this crate
//! -- in particular the agent loop (C3) -- ever touches a wire format.

use crate::adapters;
use crate::error::Result;
use ivo_protocol::Message;
use ivo_protocol::ProviderConfig;
use ivo_protocol::ProviderKind;
use ivo_protocol::StreamChunk;
use ivo_protocol::ToolDefinition;
use std::pin::Pin;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;

/// Per-call options the agent loop supplies alongside the conversation:
/// the system prompt (sent out-of-band by Anthropic, as the first
/// message by OpenAI-compatible providers) is threaded through here
/// rather than forcing every caller to special-case one wire format.
#[derive(Debug, Clone, Default)]
pub struct StreamOptions {
    pub system_prompt: Option<String>,
}

/// Holds one lazily-nothing HTTP client per wire format. Cheap to
/// construct; safe to share across tasks (each `reqwest::Client` is
/// itself a cheap `Arc`-backed handle).
#[derive(Debug, Clone, Default)]
pub struct InferenceClient {
    openai: openai_sdk::OpenAiClient,
    anthropic: anthropic_sdk::AnthropicClient,
}

impl InferenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open one completion stream against `config.provider_kind` and
    /// return a normalized `Stream` of [`StreamChunk`]s (§4.2).
    pub async fn stream(
        &self,
        config: &ProviderConfig,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: &StreamOptions,
        cancel_token: CancellationToken,
    ) -> Result<Pin<Box<dyn Stream<Item = StreamChunk> + Send>>> {
        match config.provider_kind {
            ProviderKind::OpenAi => {
                let mut wire_messages = messages.to_vec();
                if let Some(system_prompt) = &options.system_prompt {
                    wire_messages.insert(0, Message::system(system_prompt.clone()));
                }
                adapters::openai::stream(&self.openai, config, &wire_messages, tools, cancel_token).await
            }
            ProviderKind::Anthropic => {
                adapters::anthropic::stream(
                    &self.anthropic,
                    config,
                    options.system_prompt.as_deref(),
                    messages,
                    tools,
                    cancel_token,
                )
                .await
            }
        }
    }
}

#[cfg(test)]
#[path = "client.test.rs"]
mod tests;
