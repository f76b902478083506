//! Errors raised while building or validating a conversation.

use ivo_error::ErrorExt;
use ivo_error::Location;
use ivo_error::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum MessageError {
    /// A tool message referenced a `tool_call_id` with no matching,
    /// not-yet-answered assistant tool call.
    #[snafu(display("tool message references unknown or already-answered call id: {call_id}"))]
    DanglingToolCallId {
        call_id: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// An assistant message carried both text and tool calls, which the
    /// wire format treats as mutually exclusive.
    #[snafu(display("assistant message cannot carry both text and tool calls"))]
    MixedAssistantContent {
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for MessageError {
    fn status_code(&self) -> StatusCode {
        match self {
            MessageError::DanglingToolCallId { .. } => StatusCode::InvalidRequest,
            MessageError::MixedAssistantContent { .. } => StatusCode::InvalidRequest,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, MessageError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
