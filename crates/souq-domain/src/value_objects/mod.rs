//! Domain Value Objects
//!
//! Immutable values describing embeddings, stored vectors and search
//! requests/results. Entities with identity live in `crate::entities`.

mod embedding;
mod search;

pub use embedding::{Embedding, EntityKind, SimilarityHit, SimilarityQuery, VectorMetadata, VectorRecord};
pub use search::{
    ProductFilter, ProductOrder, ProductSummary, RelatedProduct, SearchOptions, SearchResponse,
    SortMode,
};
