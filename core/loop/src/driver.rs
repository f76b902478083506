//! The agent loop (C3): drives one `agent_loop` invocation to completion,
//! translating provider stream chunks into [`AgentEvent`]s and dispatching
//! tool calls through C1 in between turns.

use crate::error::loop_error;
use crate::error::LoopError;
use futures::StreamExt;
use ivo_inference::InferenceClient;
use ivo_inference::StreamOptions;
use ivo_message::Conversation;
use ivo_message::RepetitionGuard;
use ivo_protocol::AgentEvent;
use ivo_protocol::LoopConfig;
use ivo_protocol::Message;
use ivo_protocol::ProviderConfig;
use ivo_protocol::StreamChunk;
use ivo_protocol::TokenUsage;
use ivo_protocol::ToolCall;
use ivo_tools::ToolContext;
use ivo_tools::ToolOutputExt;
use ivo_tools::ToolRegistry;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;
use tracing::debug;

/// Output events are fanned out to the caller over a bounded channel; a
/// single turn can emit a handful of events per network chunk, so this is
/// wider than C2's depth-1 transport channel but still bounded so a loop
/// nobody is draining cannot grow unboundedly.
const CHANNEL_DEPTH: usize = 64;

/// Builds an [`AgentLoop`] from its fixed, per-conversation collaborators:
/// the resolved provider config, the tool registry, and the working
/// directory tools execute against.
pub struct AgentLoopBuilder {
    provider_config: ProviderConfig,
    registry: Arc<ToolRegistry>,
    working_dir: PathBuf,
    config: LoopConfig,
    inference: InferenceClient,
}

impl AgentLoopBuilder {
    pub fn new(provider_config: ProviderConfig, registry: Arc<ToolRegistry>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider_config,
            registry,
            working_dir: working_dir.into(),
            config: LoopConfig::default(),
            inference: InferenceClient::new(),
        }
    }

    pub fn with_config(mut self, config: LoopConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> AgentLoop {
        AgentLoop {
            provider_config: self.provider_config,
            registry: self.registry,
            working_dir: self.working_dir,
            config: self.config,
            inference: self.inference,
        }
    }
}

/// One reusable driver for `agent_loop` invocations against a fixed
/// provider and tool registry. `run` is cheap to call repeatedly -- each
/// call seeds a fresh [`Conversation`] and returns its own event stream.
pub struct AgentLoop {
    provider_config: ProviderConfig,
    registry: Arc<ToolRegistry>,
    working_dir: PathBuf,
    config: LoopConfig,
    inference: InferenceClient,
}

impl AgentLoop {
    /// Run one `agent_loop` invocation to completion. The returned stream
    /// yields every [`AgentEvent`] as it happens; the final message and
    /// accumulated usage are carried on the terminal `TurnEnd` event (or
    /// `Error` if the loop stopped early).
    pub fn run(
        &self,
        system_prompt: Option<String>,
        user_message: impl Into<String>,
    ) -> Pin<Box<dyn Stream<Item = AgentEvent> + Send>> {
        let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);
        let inference = self.inference.clone();
        let registry = Arc::clone(&self.registry);
        let working_dir = self.working_dir.clone();
        let provider_config = self.provider_config.clone();
        let config = self.config.clone();
        let user_message = user_message.into();

        tokio::spawn(async move {
            run_inner(inference, registry, working_dir, provider_config, config, system_prompt, user_message, tx).await;
        });

        Box::pin(ReceiverStream::new(rx))
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_inner(
    inference: InferenceClient,
    registry: Arc<ToolRegistry>,
    working_dir: PathBuf,
    provider_config: ProviderConfig,
    config: LoopConfig,
    system_prompt: Option<String>,
    user_message: String,
    tx: mpsc::Sender<AgentEvent>,
) {
    let mut conversation = Conversation::seed(system_prompt.as_deref(), &user_message);
    let tool_definitions = registry.list_definitions();
    let stream_options = StreamOptions { system_prompt: system_prompt.clone() };

    let mut tool_round: u32 = 0;
    let mut total_usage = TokenUsage::default();
    let mut guard = RepetitionGuard::default();

    loop {
        if config.cancel_token.is_cancelled() {
            return;
        }

        if tool_round >= config.max_tool_rounds {
            let err = loop_error::ToolRoundCeilingSnafu { rounds: tool_round }.build();
            emit_fatal(&tx, err).await;
            return;
        }

        if tx.send(AgentEvent::StreamStart).await.is_err() {
            return;
        }

        let mut stream = match inference
            .stream(
                &provider_config,
                conversation.messages(),
                &tool_definitions,
                &stream_options,
                config.cancel_token.clone(),
            )
            .await
        {
            Ok(stream) => stream,
            Err(source) => {
                emit_fatal(&tx, LoopError::from(source)).await;
                return;
            }
        };

        let mut text = String::new();
        let mut thinking = String::new();
        let mut tool_calls: Vec<ToolCall> = Vec::new();
        let mut turn_usage = TokenUsage::default();

        while let Some(chunk) = stream.next().await {
            if config.cancel_token.is_cancelled() {
                return;
            }
            match chunk {
                StreamChunk::TextDelta(delta) => {
                    text.push_str(&delta);
                    if tx.send(AgentEvent::TextDelta(delta)).await.is_err() {
                        return;
                    }
                }
                StreamChunk::ThinkingDelta(delta) => {
                    thinking.push_str(&delta);
                    if tx.send(AgentEvent::ThinkingDelta(delta)).await.is_err() {
                        return;
                    }
                }
                StreamChunk::ToolCall(call) => {
                    if tx.send(AgentEvent::ToolCallStart { call: call.clone() }).await.is_err() {
                        return;
                    }
                    if tx.send(AgentEvent::ToolCallEnd { call: call.clone() }).await.is_err() {
                        return;
                    }
                    tool_calls.push(call);
                }
                StreamChunk::Usage(usage) => turn_usage = usage,
                StreamChunk::Error(message) => {
                    let _ = tx.send(AgentEvent::Error { message }).await;
                    return;
                }
            }
        }

        if !thinking.is_empty() && tx.send(AgentEvent::ThinkingEnd).await.is_err() {
            return;
        }
        if !text.is_empty() && tx.send(AgentEvent::TextEnd).await.is_err() {
            return;
        }

        // Invariant (§4.3 step 3): when tool calls are present the
        // message's text content is empty on the wire.
        let assistant_message = if tool_calls.is_empty() {
            Message::assistant_text(text)
        } else {
            Message::assistant_tool_calls(tool_calls.clone())
        };

        conversation.push(assistant_message.clone());
        total_usage.accumulate(turn_usage);

        if tx
            .send(AgentEvent::MessageEnd { message: assistant_message.clone(), usage: turn_usage })
            .await
            .is_err()
        {
            return;
        }

        if tool_calls.is_empty() {
            let _ = tx
                .send(AgentEvent::TurnEnd { message: assistant_message, usage: total_usage })
                .await;
            return;
        }

        tool_round += 1;

        for call in tool_calls {
            if registry.lookup(&call.name).is_none() {
                conversation.push(Message::tool_result(
                    call.id.clone(),
                    format!("Error: Tool \"{}\" not found", call.name),
                ));
                continue;
            }

            if guard.push(&call.name, &call.arguments_json) {
                let err = loop_error::RepetitiveToolCallSnafu { tool: call.name.clone() }.build();
                emit_fatal(&tx, err).await;
                return;
            }

            if tx
                .send(AgentEvent::ToolExecutionStart { call_id: call.id.clone(), name: call.name.clone() })
                .await
                .is_err()
            {
                return;
            }

            let mut ctx = ToolContext::new(working_dir.clone(), config.cancel_token.clone());
            let output = match ivo_tools::execute(&registry, &call.id, &call.name, &call.arguments_json, &mut ctx).await {
                Ok(output) => output,
                Err(err) => {
                    debug!(call_id = %call.id, tool = %call.name, error = %err, "tool dispatch failed");
                    ivo_protocol::ToolOutput::error(format!("Error: {err}"))
                }
            };

            if tx
                .send(AgentEvent::ToolExecutionEnd { call_id: call.id.clone(), name: call.name.clone(), output: output.clone() })
                .await
                .is_err()
            {
                return;
            }

            conversation.push(Message::tool_result(call.id.clone(), output.content.as_transcript_text()));
        }
    }
}

async fn emit_fatal(tx: &mpsc::Sender<AgentEvent>, err: LoopError) {
    let _ = tx.send(AgentEvent::Error { message: err.to_string() }).await;
}

#[cfg(test)]
#[path = "driver.test.rs"]
mod tests;
