//! # Souq Domain
//!
//! Domain layer for the Souq product search subsystem.
//!
//! Holds the core business types (products, embeddings, search queries),
//! the port traits implemented by `souq-providers`, and the error taxonomy
//! shared by every layer. The dependency footprint stays small: serde,
//! thiserror, chrono and async-trait only.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::Product;
pub use error::{Error, Result};
