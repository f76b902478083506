//! Unifying provider streaming facade (C2): a single `stream` operation
//! that dispatches between the OpenAI-compatible and Anthropic-native
//! wire clients (`openai-sdk`, `anthropic-sdk`) behind one normalized
//! [`ivo_protocol::StreamChunk`] stream.

mod adapters;
mod client;
mod error;

pub use client::InferenceClient;
pub use client::StreamOptions;
pub use error::InferenceError;
pub use error::Result;
