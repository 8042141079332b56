//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings and the rows the vector
//! store persists for similarity search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic
/// meaning. Embeddings enable similarity search between a query and the
/// catalog.
///
/// ## Business Rules
///
/// - `vector.len()` always equals `dimensions`
/// - Model name identifies the embedding generation method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

/// Kind of entity a stored vector belongs to.
///
/// The store is shared: a product vector and a seller vector may carry the
/// same `entity_id` without colliding. Rows are keyed by
/// `(entity_id, entity_kind)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Marketplace product listing
    Product,
    /// Marketplace seller profile
    Seller,
}

impl EntityKind {
    /// Stable string form used in metadata and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Seller => "seller",
        }
    }
}

/// Structured metadata stored alongside a vector, enough to filter candidate
/// sets without a join back to the relational store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VectorMetadata {
    /// Display name of the entity at indexing time
    pub name: String,
    /// Category of the entity at indexing time, when it has one
    pub category: Option<String>,
}

/// One row of the vector store.
///
/// The relational record is the source of truth; this row is a derived,
/// rebuildable cache. `text_snapshot` keeps the exact text the vector was
/// derived from, for auditability and to skip regeneration when unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VectorRecord {
    /// Identifier of the entity this vector represents
    pub entity_id: String,
    /// Kind of the entity; part of the row key
    pub entity_kind: EntityKind,
    /// The stored embedding
    pub embedding: Embedding,
    /// Text the vector was derived from
    pub text_snapshot: String,
    /// Filterable metadata snapshot
    pub metadata: VectorMetadata,
    /// When the row was first created
    pub created_at: DateTime<Utc>,
    /// Bumped whenever the vector is regenerated
    pub updated_at: DateTime<Utc>,
}

/// Parameters of a nearest-neighbor lookup.
#[derive(Debug, Clone)]
pub struct SimilarityQuery {
    /// Query vector; must match the store's fixed width
    pub vector: Vec<f32>,
    /// Only rows of this kind are considered
    pub entity_kind: EntityKind,
    /// Maximum number of hits returned
    pub limit: usize,
    /// Relevance cutoff: hits strictly below this cosine similarity are
    /// discarded. A blunt threshold, not a probability.
    pub min_similarity: f32,
    /// Entity excluded from the results ("similar to X, not including X")
    pub exclude_entity_id: Option<String>,
}

/// One nearest-neighbor hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityHit {
    /// Identifier of the matched entity
    pub entity_id: String,
    /// Cosine similarity to the query vector, in `[-1, 1]`
    pub similarity: f32,
    /// Metadata snapshot of the matched row
    pub metadata: VectorMetadata,
}
