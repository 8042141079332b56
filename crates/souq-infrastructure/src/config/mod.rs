//! Configuration
//!
//! Typed configuration for the search subsystem, loaded with figment:
//! defaults, then a TOML file, then `SOUQ_`-prefixed environment
//! variables, later sources overriding earlier ones.

mod loader;
mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, EmbeddingConfig, LoggingConfig, SearchConfig, VectorStoreConfig};
