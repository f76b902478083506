//! The agent loop (C3): turns a conversation seed into a stream of
//! [`ivo_protocol::AgentEvent`]s, driving C2 (inference) and C1 (tools)
//! across as many tool rounds as the turn needs.

mod driver;
mod error;

pub use driver::AgentLoop;
pub use driver::AgentLoopBuilder;
pub use error::LoopError;
pub use error::Result;
pub use ivo_protocol::LoopConfig;
