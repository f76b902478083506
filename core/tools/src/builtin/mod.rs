//! Built-in tools exposing the standard read/write/edit/bash/grep
//! surfaces. The registry contract does not require knowing their
//! semantics; they are ordinary [`crate::tool::Tool`] implementations.

mod bash;
mod edit;
mod grep;
mod read;
mod write;

pub use bash::BashTool;
pub use edit::EditTool;
pub use grep::GrepTool;
pub use read::ReadTool;
pub use write::WriteTool;
