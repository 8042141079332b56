//! # Souq Providers
//!
//! Adapter implementations of the `souq-domain` ports:
//!
//! - [`embedding`] - remote OpenAI-compatible provider and a deterministic
//!   null provider for tests and offline development
//! - [`vector_store`] - in-memory cosine-similarity store
//! - [`repository`] - in-memory product repository backing the relational
//!   port in tests and local development

pub mod constants;
pub mod embedding;
pub mod repository;
pub mod vector_store;
