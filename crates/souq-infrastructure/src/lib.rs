//! # Souq Infrastructure
//!
//! Outer-layer concerns of the product search subsystem: configuration
//! loading and validation, structured logging bootstrap, error context
//! helpers, and the wiring that turns configuration into live services.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod wiring;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use wiring::{build_embedding_provider, build_search_stack, build_vector_store, SearchStack};
