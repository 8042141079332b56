//! In-memory vector store implementation
//!
//! Stores vector rows in a concurrent hash map and answers similarity
//! queries with a linear cosine scan. Data is not persisted and is lost on
//! restart; the relational store remains the source of truth and rows are
//! rebuildable from it. Linear scan is adequate at single-catalog scale
//! (tens of thousands of rows).

use std::cmp::Ordering;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use souq_domain::error::{Error, Result};
use souq_domain::ports::VectorStore;
use souq_domain::value_objects::{EntityKind, SimilarityHit, SimilarityQuery, VectorRecord};

/// Row key: rows are unique per `(entity_kind, entity_id)` pair
type RowKey = (EntityKind, String);

/// In-memory vector store
///
/// Concurrent reads and writes are handled by dashmap's sharding; writers
/// never block readers of unrelated rows, and same-key upserts are
/// last-writer-wins.
pub struct InMemoryVectorStore {
    dimensions: usize,
    rows: DashMap<RowKey, VectorRecord>,
}

impl InMemoryVectorStore {
    /// Create a store with the given fixed vector width
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            rows: DashMap::new(),
        }
    }

    /// The store's fixed vector width
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of stored rows, all kinds included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(&self, record: VectorRecord) -> Result<()> {
        if record.embedding.vector.len() != self.dimensions {
            return Err(Error::dimension_mismatch(
                self.dimensions,
                record.embedding.vector.len(),
            ));
        }

        debug!(
            entity_id = %record.entity_id,
            entity_kind = record.entity_kind.as_str(),
            "vector row upserted"
        );
        self.rows
            .insert((record.entity_kind, record.entity_id.clone()), record);
        Ok(())
    }

    async fn delete(&self, entity_id: &str, entity_kind: EntityKind) -> Result<()> {
        // Absent rows are a no-op, not an error
        if self.rows.remove(&(entity_kind, entity_id.to_string())).is_some() {
            debug!(entity_id, entity_kind = entity_kind.as_str(), "vector row removed");
        }
        Ok(())
    }

    async fn get(&self, entity_id: &str, entity_kind: EntityKind) -> Result<Option<VectorRecord>> {
        Ok(self
            .rows
            .get(&(entity_kind, entity_id.to_string()))
            .map(|row| row.value().clone()))
    }

    async fn search_similar(&self, query: &SimilarityQuery) -> Result<Vec<SimilarityHit>> {
        if query.vector.len() != self.dimensions || query.limit == 0 {
            return Ok(Vec::new());
        }

        // Precompute the query norm once
        let query_norm = compute_norm(&query.vector);

        let mut hits: Vec<SimilarityHit> = self
            .rows
            .iter()
            .filter(|entry| entry.key().0 == query.entity_kind)
            .filter(|entry| {
                query
                    .exclude_entity_id
                    .as_deref()
                    .is_none_or(|excluded| entry.key().1 != excluded)
            })
            .filter_map(|entry| {
                let record = entry.value();
                let similarity =
                    cosine_similarity_with_norm(&query.vector, &record.embedding.vector, query_norm);
                (similarity >= query.min_similarity).then(|| SimilarityHit {
                    entity_id: record.entity_id.clone(),
                    similarity,
                    metadata: record.metadata.clone(),
                })
            })
            .collect();

        // Similarity descending, entity_id ascending on ties: the result
        // order is reproducible for a fixed row set
        hits.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.entity_id.cmp(&b.entity_id))
        });
        hits.truncate(query.limit);

        Ok(hits)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Raw cosine similarity with a precomputed query norm.
///
/// `dot(a, b) / (|a| * |b|)`, range `[-1, 1]`; zero-norm operands score
/// `0.0`.
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
