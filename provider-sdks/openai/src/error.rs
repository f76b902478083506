//! Error taxonomy for the OpenAI-compatible wire client.

use ivo_error::ErrorExt;
use ivo_error::Location;
use ivo_error::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum OpenAiError {
    /// The underlying HTTP transport failed (connect, TLS, body read).
    #[snafu(display("transport error: {source}"))]
    Transport {
        source: reqwest::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// The provider returned a non-2xx response.
    #[snafu(display("provider returned {status}: {message}"))]
    Http {
        status: u16,
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// A streamed chunk could not be parsed as JSON.
    #[snafu(display("failed to parse stream chunk: {message}"))]
    Parse {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for OpenAiError {
    fn status_code(&self) -> StatusCode {
        match self {
            OpenAiError::Transport { .. } => StatusCode::NetworkError,
            OpenAiError::Http { status, .. } if *status == 429 => StatusCode::RateLimited,
            OpenAiError::Http { status, .. } if *status >= 500 => StatusCode::ServiceUnavailable,
            OpenAiError::Http { .. } => StatusCode::ProviderError,
            OpenAiError::Parse { .. } => StatusCode::ParseError,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<reqwest::Error> for OpenAiError {
    fn from(source: reqwest::Error) -> Self {
        open_ai_error::TransportSnafu.into_error(source)
    }
}

pub type Result<T> = std::result::Result<T, OpenAiError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
