//! HTTP client opening one `v1/messages` SSE stream per call.

use crate::auth::build_auth_headers;
use crate::convert::build_request;
use crate::error::anthropic_error;
use crate::error::AnthropicError;
use crate::error::Result;
use crate::stream::apply_event;
use crate::stream::drain_events;
use crate::stream::extract_data_payload;
use crate::stream::AnthropicStreamState;
use crate::types::ErrorBody;
use crate::types::SseEvent;
use futures::StreamExt;
use ivo_protocol::Message;
use ivo_protocol::ProviderConfig;
use ivo_protocol::StreamChunk;
use ivo_protocol::ToolDefinition;
use reqwest::header::CONTENT_TYPE;
use std::pin::Pin;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::warn;

/// Required by the Anthropic Messages API on every request.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Depth-1 channel: the reader task cannot get more than one chunk ahead
/// of the consumer, throttling the HTTP reader per §5's back-pressure
/// requirement.
const CHANNEL_DEPTH: usize = 1;

/// Default completion ceiling when the caller does not override it.
const DEFAULT_MAX_TOKENS: u32 = 8192;

#[derive(Debug, Clone, Default)]
pub struct AnthropicClient {
    http: reqwest::Client,
}

impl AnthropicClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Open one stream against `{base_url}/v1/messages` and return a
    /// `Stream` of normalized [`StreamChunk`]s. The returned stream ends
    /// when the provider sends `message_stop`, the HTTP body ends, or
    /// `cancel_token` fires.
    pub async fn stream(
        &self,
        config: &ProviderConfig,
        system_prompt: Option<&str>,
        messages: &[Message],
        tools: &[ToolDefinition],
        cancel_token: CancellationToken,
    ) -> Result<Pin<Box<dyn Stream<Item = StreamChunk> + Send>>> {
        let request = build_request(config, system_prompt, messages, tools, DEFAULT_MAX_TOKENS);
        let url = format!("{}/v1/messages", config.base_url.trim_end_matches('/'));
        let auth = build_auth_headers(config);

        let mut builder = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header(auth.credential.0, auth.credential.1);
        if let Some(beta) = &auth.beta {
            builder = builder.header("anthropic-beta", beta.clone());
        }

        debug!(url, model = %config.model, "opening anthropic stream");
        let response = builder.json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| truncate(&body, 500));
            return Err(anthropic_error::HttpSnafu {
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
    let mut state = AnthropicStreamState::new();

    loop {
        let bytes = tokio::select! {
            _ = cancel_token.cancelled() => break,
            chunk = byte_stream.next() => match chunk {
                Some(Ok(bytes)) => bytes,
                Some(Err(err)) => {
                    warn!(error = %err, "anthropic stream read failed");
                    let _ = tx.send(StreamChunk::Error(err.to_string())).await;
                    break;
                }
                None => break,
            },
        };

        buffer.push_str(&String::from_utf8_lossy(&bytes));
        for event in drain_events(&mut buffer) {
            let Some(payload) = extract_data_payload(&event) else {
                continue;
            };
            let decoded: SseEvent = match serde_json::from_str(payload) {
                Ok(decoded) => decoded,
                Err(err) => {
                    let message = AnthropicError::from_parse(format!("{err}: {payload}")).to_string();
                    if tx.send(StreamChunk::Error(message)).await.is_err() {
                        return;
                    }
                    continue;
                }
            };
            let is_stop = matches!(decoded, SseEvent::MessageStop {});
            for out in apply_event(decoded, &mut state) {
                if tx.send(out).await.is_err() {
                    return;
                }
            }
            if is_stop {
                return;
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

impl AnthropicError {
    fn from_parse(message: String) -> Self {
        anthropic_error::ParseSnafu { message }.build()
    }
}

#[cfg(test)]
#[path = "client.test.rs"]
mod tests;
