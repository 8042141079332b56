//! Port Traits
//!
//! Contracts between the application layer and the outside world. Adapters
//! live in `souq-providers`; the application layer only ever sees
//! `Arc<dyn Trait>`.

mod embedding;
mod repository;
mod vector_store;

pub use embedding::{compose_product_text, EmbeddingProvider};
pub use repository::ProductRepository;
pub use vector_store::VectorStore;
