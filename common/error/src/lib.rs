//! Shared error taxonomy for the workspace.
//!
//! Every crate defines its own `snafu`-based error enum and implements
//! [`ErrorExt`] against the [`StatusCode`] registry defined here, so that
//! retryability and log-visibility decisions are made the same way
//! everywhere instead of being re-invented per crate.

mod ext;
mod status_code;

pub use ext::boxed;
pub use ext::ErrorExt;
pub use ext::PlainError;
pub use status_code::StatusCategory;
pub use status_code::StatusCode;
pub use status_code::StatusMeta;

/// Location captured at the error's construction site via `#[snafu(implicit)]`.
pub type Location = snafu::Location;
