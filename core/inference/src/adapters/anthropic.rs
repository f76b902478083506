//! Adapter over [`anthropic_sdk`]: opens a stream and maps its error
//! type into [`crate::error::InferenceError`].

use crate::error::Result;
use ivo_protocol::Message;
use ivo_protocol::ProviderConfig;
use ivo_protocol::StreamChunk;
use ivo_protocol::ToolDefinition;
use std::pin::Pin;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;

pub async fn stream(
    client: &anthropic_sdk::AnthropicClient,
    config: &ProviderConfig,
    system_prompt: Option<&str>,
    messages: &[Message],
    tools: &[ToolDefinition],
    cancel_token: CancellationToken,
) -> Result<Pin<Box<dyn Stream<Item = StreamChunk> + Send>>> {
    Ok(client.stream(config, system_prompt, messages, tools, cancel_token).await?)
}
