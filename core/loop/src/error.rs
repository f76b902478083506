//! Error taxonomy for the agent loop (C3). The two loop-specific failure
//! modes -- the repetitive-call guard and the tool-round ceiling -- carry
//! the exact wording `agent_loop` emits via `AgentEvent::Error` (§4.3
//! steps 6-7); everything else wraps a collaborator's error.

use ivo_error::ErrorExt;
use ivo_error::Location;
use ivo_error::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum LoopError {
    /// The same tool was called with the same arguments three times in a row.
    #[snafu(display("Tried running {tool} with the same arguments 3 times in a row. There is probably something wrong."))]
    RepetitiveToolCall {
        tool: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// The turn budget (`LoopConfig::max_tool_rounds`) was exhausted.
    #[snafu(display("Stopped after {rounds} tool rounds to prevent infinite loop"))]
    ToolRoundCeiling {
        rounds: u32,
        #[snafu(implicit)]
        location: Location,
    },

    /// Opening or reading a provider stream failed.
    #[snafu(display("inference error: {source}"))]
    Inference {
        source: ivo_inference::InferenceError,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for LoopError {
    fn status_code(&self) -> StatusCode {
        match self {
            LoopError::RepetitiveToolCall { .. } => StatusCode::InvalidRequest,
            LoopError::ToolRoundCeiling { .. } => StatusCode::InvalidRequest,
            LoopError::Inference { source, .. } => source.status_code(),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<ivo_inference::InferenceError> for LoopError {
    fn from(source: ivo_inference::InferenceError) -> Self {
        loop_error::InferenceSnafu.into_error(source)
    }
}

pub type Result<T> = std::result::Result<T, LoopError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
