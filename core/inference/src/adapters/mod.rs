//! One thin adapter per provider SDK, each giving the facade a uniform
//! `stream(...) -> Result<Stream<StreamChunk>>` shape over a wire format
//! that otherwise differs (system-prompt handling, auth, tool schema).

pub mod anthropic;
pub mod openai;
