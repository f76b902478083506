//! Error taxonomy for the Anthropic Messages wire client.

use ivo_error::ErrorExt;
use ivo_error::Location;
use ivo_error::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum AnthropicError {
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

    /// A streamed event could not be parsed as JSON.
    #[snafu(display("failed to parse stream event: {message}"))]
    Parse {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// The provider sent an `error` SSE event mid-stream.
    #[snafu(display("stream error: {message}"))]
    Stream {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for AnthropicError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnthropicError::Transport { .. } => StatusCode::NetworkError,
            AnthropicError::Http { status, .. } if *status == 401 => StatusCode::AuthenticationFailed,
            AnthropicError::Http { status, .. } if *status == 429 => StatusCode::RateLimited,
            AnthropicError::Http { status, .. } if *status >= 500 => StatusCode::ServiceUnavailable,
            AnthropicError::Http { .. } => StatusCode::ProviderError,
            AnthropicError::Parse { .. } => StatusCode::ParseError,
            AnthropicError::Stream { .. } => StatusCode::StreamError,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<reqwest::Error> for AnthropicError {
    fn from(source: reqwest::Error) -> Self {
        anthropic_error::TransportSnafu.into_error(source)
    }
}

pub type Result<T> = std::result::Result<T, AnthropicError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
