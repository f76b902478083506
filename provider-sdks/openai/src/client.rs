//! HTTP client opening one `chat/completions` SSE stream per call.

use crate::convert::build_request;
use crate::error::OpenAiError;
use crate::error::Result;
use crate::stream::decode_event;
use crate::stream::drain_events;
use crate::stream::extract_data_payload;
use crate::stream::ToolCallAccumulator;
use crate::types::ErrorBody;
use futures::StreamExt;
use ivo_protocol::Message;
use ivo_protocol::ProviderConfig;
use ivo_protocol::StreamChunk;
use ivo_protocol::ToolDefinition;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use std::pin::Pin;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::warn;

/// Depth-1 channel: the reader task cannot get more than one chunk ahead
/// of the consumer, throttling the HTTP reader per §5's back-pressure
/// requirement.
const CHANNEL_DEPTH: usize = 1;

#[derive(Debug, Clone, Default)]
pub struct OpenAiClient {
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Open one stream against `{base_url}/chat/completions` and return a
    /// `Stream` of normalized [`StreamChunk`]s. The returned stream ends
    /// when the provider sends `[DONE]`, the HTTP body ends, or
    /// `cancel_token` fires.
    pub async fn stream(
        &self,
        config: &ProviderConfig,
        messages: &[Message],
        tools: &[ToolDefinition],
        cancel_token: CancellationToken,
    ) -> Result<Pin<Box<dyn Stream<Item = StreamChunk> + Send>>> {
        let request = build_request(&config.model, messages, tools);
        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        let mut builder = self.http.post(&url).header(CONTENT_TYPE, "application/json");
        if let Some(api_key) = &config.api_key {
            builder = builder.header(AUTHORIZATION, format!("Bearer {api_key}"));
        }

        debug!(url, model = %config.model, "opening openai-compatible stream");
        let response = builder.json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| truncate(&body, 500));
            return Err(crate::error::open_ai_error::HttpSnafu {
                status: status.as_u16(),
                message,
            }
            .build());
        }

        let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);
        tokio::spawn(read_stream(response, tx, cancel_token));
        Ok(Box::pin(ReceiverStream::new(rx)))
    }
}

async fn read_stream(response: reqwest::Response, tx: mpsc::Sender<StreamChunk>, cancel_token: CancellationToken) {
    let mut byte_stream = response.bytes_stream();
    let mut buffer = String::new();
    let mut acc = ToolCallAccumulator::new();

    loop {
        let bytes = tokio::select! {
            _ = cancel_token.cancelled() => break,
            chunk = byte_stream.next() => match chunk {
                Some(Ok(bytes)) => bytes,
                Some(Err(err)) => {
                    warn!(error = %err, "openai stream read failed");
                    let _ = tx.send(StreamChunk::Error(err.to_string())).await;
                    break;
                }
                None => break,
            },
        };

        buffer.push_str(&String::from_utf8_lossy(&bytes));
        for event in drain_events(&mut buffer) {
            let Some(payload) = extract_data_payload(&event) else {
                if event.contains("[DONE]") {
                    return;
                }
                continue;
            };
            for out in decode_event(payload, &mut acc) {
                if tx.send(out).await.is_err() {
                    return;
                }
            }
        }
    }
}

fn truncate(body: &str, max_len: usize) -> String {
    if body.len() <= max_len {
        body.to_string()
    } else {
        format!("{}...", &body[..max_len])
    }
}

#[cfg(test)]
#[path = "client.test.rs"]
mod tests;
