use crate::error::Result;
use crate::value_objects::{EntityKind, SimilarityHit, SimilarityQuery, VectorRecord};
use async_trait::async_trait;

/// Vector Storage Interface
///
/// Persists `(entity_id, entity_kind)`-keyed vector rows and answers
/// nearest-neighbor queries over them.
///
/// # Similarity definition
///
/// Similarity is raw cosine similarity, `dot(a, b) / (|a| * |b|)`, in
/// `[-1, 1]`; a zero-norm operand scores `0.0`. `min_similarity` cuts
/// against this value, so it directly determines recall.
///
/// # Determinism
///
/// For a fixed set of rows, `search_similar` returns the same ordered
/// result for the same query: similarity descending, ties broken by
/// `entity_id` ascending.
///
/// # Failure policy
///
/// `upsert` and `delete` failures propagate (a silently lost write corrupts
/// catalog-search consistency). Search failures surface as
/// [`Error::VectorStore`], which callers treat as "no semantic matches".
///
/// [`Error::VectorStore`]: crate::error::Error::VectorStore
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert or replace the row keyed by the record's
    /// `(entity_id, entity_kind)`. Last writer wins on concurrent upserts
    /// for the same key. Rejects vectors that do not match the store's
    /// fixed width with [`Error::DimensionMismatch`].
    ///
    /// [`Error::DimensionMismatch`]: crate::error::Error::DimensionMismatch
    async fn upsert(&self, record: VectorRecord) -> Result<()>;

    /// Remove the row; a no-op, not an error, when the row is absent.
    async fn delete(&self, entity_id: &str, entity_kind: EntityKind) -> Result<()>;

    /// Fetch a single row, if present.
    async fn get(&self, entity_id: &str, entity_kind: EntityKind) -> Result<Option<VectorRecord>>;

    /// Return up to `query.limit` rows of `query.entity_kind` with
    /// similarity `>= query.min_similarity`, ordered per the determinism
    /// contract above, skipping `query.exclude_entity_id`.
    async fn search_similar(&self, query: &SimilarityQuery) -> Result<Vec<SimilarityHit>>;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
