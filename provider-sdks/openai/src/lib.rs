//! OpenAI-compatible wire client (C2, §4.2): opens one `chat/completions`
//! SSE stream and yields normalized [`ivo_protocol::StreamChunk`]s.

mod client;
mod convert;
mod error;
mod sanitize;
mod stream;
mod types;

pub use client::OpenAiClient;
pub use convert::build_request;
pub use error::OpenAiError;
pub use error::Result;
pub use sanitize::sanitize_schema;
pub use stream::decode_event;
pub use stream::ToolCallAccumulator;
