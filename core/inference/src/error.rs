//! Error taxonomy for the unifying inference facade (C2).
//!
//! Wraps each provider SDK's own error behind one enum so callers above
//! this crate (the agent loop, C3) never match on `OpenAiError` or
//! `AnthropicError` directly.

use ivo_error::ErrorExt;
use ivo_error::Location;
use ivo_error::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum InferenceError {
    /// The OpenAI-compatible adapter failed to open or read a stream.
    #[snafu(display("openai provider error: {source}"))]
    OpenAi {
        source: openai_sdk::OpenAiError,
        #[snafu(implicit)]
        location: Location,
    },

    /// The Anthropic adapter failed to open or read a stream.
    #[snafu(display("anthropic provider error: {source}"))]
    Anthropic {
        source: anthropic_sdk::AnthropicError,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for InferenceError {
    fn status_code(&self) -> StatusCode {
        match self {
            InferenceError::OpenAi { source, .. } => source.status_code(),
            InferenceError::Anthropic { source, .. } => source.status_code(),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<openai_sdk::OpenAiError> for InferenceError {
    fn from(source: openai_sdk::OpenAiError) -> Self {
        inference_error::OpenAiSnafu.into_error(source)
    }
}

impl From<anthropic_sdk::AnthropicError> for InferenceError {
    fn from(source: anthropic_sdk::AnthropicError) -> Self {
        inference_error::AnthropicSnafu.into_error(source)
    }
}

pub type Result<T> = std::result::Result<T, InferenceError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
