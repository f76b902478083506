//! Anthropic-native wire client (C2, §4.2): opens one `v1/messages` SSE
//! stream and yields normalized [`ivo_protocol::StreamChunk`]s.

mod auth;
mod client;
mod convert;
mod error;
mod stream;
mod types;

pub use auth::build_auth_headers;
pub use auth::AuthHeaders;
pub use client::AnthropicClient;
pub use convert::build_request;
pub use error::AnthropicError;
pub use error::Result;
pub use stream::apply_event;
pub use stream::AnthropicStreamState;
