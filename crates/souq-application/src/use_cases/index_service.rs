//! Embedding lifecycle for products
//!
//! Owns the write side of the vector store: (re)generating a product's
//! embedding when it is created or edited, removing it when the product is
//! deleted or unpublished, and the related-products lookup.
//!
//! Two error boundaries: the explicit operations propagate failures, while
//! the `handle_*` post-commit hooks log and swallow them so a product
//! mutation never fails on search-index health.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use souq_domain::constants::DEFAULT_RELATED_MIN_SIMILARITY;
use souq_domain::entities::Product;
use souq_domain::error::Result;
use souq_domain::ports::{compose_product_text, EmbeddingProvider, VectorStore};
use souq_domain::value_objects::{
    EntityKind, RelatedProduct, SimilarityQuery, VectorMetadata, VectorRecord,
};

/// Write-side service for product embeddings.
pub struct ProductIndexService {
    embedding: Arc<dyn EmbeddingProvider>,
    vectors: Arc<dyn VectorStore>,
    related_min_similarity: f32,
}

impl ProductIndexService {
    /// Create an index service over the given ports
    pub fn new(embedding: Arc<dyn EmbeddingProvider>, vectors: Arc<dyn VectorStore>) -> Self {
        Self {
            embedding,
            vectors,
            related_min_similarity: DEFAULT_RELATED_MIN_SIMILARITY,
        }
    }

    /// Override the default similarity cutoff for related-product lookups
    pub fn with_related_min_similarity(mut self, min_similarity: f32) -> Self {
        self.related_min_similarity = min_similarity;
        self
    }

    /// Create or regenerate a product's embedding row.
    ///
    /// Skips the provider round-trip when the stored text snapshot already
    /// matches, so repeated indexing of unchanged products is idempotent
    /// and free. Errors propagate: this is the explicit rebuild operation.
    pub async fn store_product_embedding(
        &self,
        product_id: &str,
        name: &str,
        description: &str,
        category: Option<&str>,
    ) -> Result<()> {
        let text = compose_product_text(name, description, category);

        let existing = self.vectors.get(product_id, EntityKind::Product).await?;
        if let Some(existing) = &existing {
            if existing.text_snapshot == text {
                debug!(product_id, "embedding text unchanged, skipping regeneration");
                return Ok(());
            }
        }

        let embedding = self.embedding.embed(&text).await?;

        let now = Utc::now();
        let record = VectorRecord {
            entity_id: product_id.to_string(),
            entity_kind: EntityKind::Product,
            embedding,
            text_snapshot: text,
            metadata: VectorMetadata {
                name: name.to_string(),
                category: category.map(str::to_string),
            },
            created_at: existing.map_or(now, |row| row.created_at),
            updated_at: now,
        };

        self.vectors.upsert(record).await
    }

    /// Remove a product's embedding row; a no-op when none exists.
    pub async fn delete_product_embedding(&self, product_id: &str) -> Result<()> {
        self.vectors.delete(product_id, EntityKind::Product).await
    }

    /// Nearest neighbors of a product, excluding the product itself.
    ///
    /// `min_similarity` falls back to the configured default when not
    /// given. A product with no stored vector has no semantic neighborhood
    /// yet; that is an empty result, not an error.
    pub async fn related_products(
        &self,
        product_id: &str,
        limit: usize,
        min_similarity: Option<f32>,
    ) -> Result<Vec<RelatedProduct>> {
        let Some(record) = self.vectors.get(product_id, EntityKind::Product).await? else {
            return Ok(Vec::new());
        };

        let hits = self
            .vectors
            .search_similar(&SimilarityQuery {
                vector: record.embedding.vector,
                entity_kind: EntityKind::Product,
                limit,
                min_similarity: min_similarity.unwrap_or(self.related_min_similarity),
                exclude_entity_id: Some(product_id.to_string()),
            })
            .await?;

        Ok(hits
            .into_iter()
            .map(|hit| RelatedProduct {
                product_id: hit.entity_id,
                similarity: hit.similarity,
            })
            .collect())
    }

    /// Post-commit hook for product create/update.
    ///
    /// Best-effort: a failed regeneration only degrades this product's
    /// semantic discoverability, so it is logged and swallowed.
    pub async fn handle_product_saved(&self, product: &Product) {
        if let Err(err) = self
            .store_product_embedding(
                &product.id,
                &product.name,
                &product.description,
                Some(&product.category),
            )
            .await
        {
            warn!(
                product_id = %product.id,
                error = %err,
                "embedding generation failed; product stays searchable by keyword"
            );
        }
    }

    /// Post-commit hook for product delete/unpublish.
    pub async fn handle_product_deleted(&self, product_id: &str) {
        if let Err(err) = self.delete_product_embedding(product_id).await {
            warn!(product_id, error = %err, "failed to remove product embedding");
        }
    }
}
