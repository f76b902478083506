//! Error taxonomy for the scheduler and task-state reducer (C4/C5).

use ivo_error::ErrorExt;
use ivo_error::Location;
use ivo_error::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ExecutorError {
    /// A [`ivo_protocol::SchedulerConfig`] field was out of range.
    #[snafu(display("invalid scheduler config: {message}"))]
    InvalidConfig {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ExecutorError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExecutorError::InvalidConfig { .. } => StatusCode::InvalidRequest,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, ExecutorError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
