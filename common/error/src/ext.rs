//! Shared error extension trait implemented by every crate's local error enum.

use crate::StatusCode;
use std::fmt;

/// Gives a crate-local error enum a [`StatusCode`] and a way to render a
/// message safe to hand back across a process boundary.
pub trait ErrorExt: std::error::Error {
    /// The status code classifying this error.
    fn status_code(&self) -> StatusCode;

    /// Downcasting hook for callers that need the concrete type back.
    fn as_any(&self) -> &dyn std::any::Any;

    /// Whether the operation that produced this error is safe to retry.
    fn is_retryable(&self) -> bool {
        self.status_code().is_retryable()
    }

    /// A message safe to surface to an external caller.
    ///
    /// Codes whose metadata marks them as loggable hide the underlying
    /// message (it may carry internal details) behind a generic
    /// `"<name> error: <code>"` string; everything else passes the
    /// `Display` message through unchanged.
    fn output_msg(&self) -> String {
        let code = self.status_code();
        if code.should_log_error() {
            format!("{} error: {}", code.name(), code as i32)
        } else {
            self.to_string()
        }
    }
}

/// A type-erased error carrying an explicit [`StatusCode`], used at the
/// edges of the workspace where callers hold a boxed source error rather
/// than one of the crate-local enums.
pub struct PlainError {
    message: String,
    code: StatusCode,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl PlainError {
    /// Build a `PlainError` from a message and a status code.
    pub fn new(message: impl Into<String>, code: StatusCode) -> Self {
        Self {
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Wrap any `std::error::Error` as a `PlainError` carrying `code`.
    pub fn boxed<E>(source: E, code: StatusCode) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            code,
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainError")
            .field("message", &self.message)
            .field("code", &self.code)
            .finish()
    }
}

impl std::error::Error for PlainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl ErrorExt for PlainError {
    fn status_code(&self) -> StatusCode {
        self.code
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Convenience free function mirroring [`PlainError::boxed`], matching the
/// call-site shape used throughout the workspace (`boxed(err, code)`).
pub fn boxed<E>(source: E, code: StatusCode) -> PlainError
where
    E: std::error::Error + Send + Sync + 'static,
{
    PlainError::boxed(source, code)
}

#[cfg(test)]
#[path = "ext.test.rs"]
mod tests;
