//! Error taxonomy for the slicer engine (C7) and the context store (C8).

use ivo_error::ErrorExt;
use ivo_error::Location;
use ivo_error::StatusCode;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ContextError {
    /// The context store's disk layout could not be read or written.
    #[snafu(display("context store io error: {message}"))]
    Io {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// `load`/`load_meta` was asked for an id with no matching entry.
    #[snafu(display("no saved context with id {id}"))]
    NotFound {
        id: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// A prefix matched more than one saved context.
    #[snafu(display("prefix {prefix} matches more than one saved context"))]
    AmbiguousPrefix {
        prefix: String,
        #[snafu(implicit)]
        location: Location,
    },

    /// A persisted `.meta.json` file failed to parse.
    #[snafu(display("failed to parse context metadata for {id}: {source}"))]
    MetaParse {
        id: String,
        source: serde_json::Error,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ContextError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContextError::Io { .. } => StatusCode::IoError,
            ContextError::NotFound { .. } => StatusCode::FileNotFound,
            ContextError::AmbiguousPrefix { .. } => StatusCode::InvalidRequest,
            ContextError::MetaParse { .. } => StatusCode::ParseError,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl From<std::io::Error> for ContextError {
    fn from(source: std::io::Error) -> Self {
        context_error::IoSnafu { message: source.to_string() }.build()
    }
}

pub type Result<T> = std::result::Result<T, ContextError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
