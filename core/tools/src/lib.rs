//! Tool registry and executor (C1): a uniform callable interface for
//! built-in and user tools, and a dispatcher that runs one call and
//! returns a structured result.

pub mod builtin;
pub mod context;
pub mod error;
pub mod executor;
pub mod registry;
pub mod tool;

pub use context::ToolContext;
pub use error::ToolError;
pub use executor::execute;
pub use registry::ToolRegistry;
pub use tool::Tool;
pub use tool::ToolOutputExt;
