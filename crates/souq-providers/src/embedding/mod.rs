//! Embedding provider adapters

pub mod helpers;
mod null;
mod openai;

pub use null::NullEmbeddingProvider;
pub use openai::OpenAiEmbeddingProvider;
