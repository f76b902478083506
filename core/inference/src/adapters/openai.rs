//! Adapter over [`openai_sdk`]: opens a stream and maps its error type
//! into [`crate::error::InferenceError`].

use crate::error::Result;
use ivo_protocol::Message;
use ivo_protocol::ProviderConfig;
use ivo_protocol::StreamChunk;
use ivo_protocol::ToolDefinition;
use std::pin::Pin;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;

pub async fn stream(
    client: &openai_sdk::OpenAiClient,
    config: &ProviderConfig,
    messages: &[Message],
    tools: &[ToolDefinition],
    cancel_token: CancellationToken,
) -> Result<Pin<Box<dyn Stream<Item = StreamChunk> + Send>>> {
    Ok(client.stream(config, messages, tools, cancel_token).await?)
}
