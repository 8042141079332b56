//! Tests for the product index service
//!
//! Real Null/InMemory providers throughout; stubs only for failure-path
//! checks.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use souq_application::use_cases::{compose_product_text, ProductIndexService};
use souq_domain::entities::Product;
use souq_domain::error::{Error, Result};
use souq_domain::ports::{EmbeddingProvider, VectorStore};
use souq_domain::value_objects::{Embedding, EntityKind};
use souq_providers::embedding::NullEmbeddingProvider;
use souq_providers::vector_store::InMemoryVectorStore;

const DIM: usize = 32;

struct FailingEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for FailingEmbeddingProvider {
    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Embedding>> {
        Err(Error::provider_unavailable("stubbed outage"))
    }

    fn dimensions(&self) -> usize {
        DIM
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

fn service() -> (ProductIndexService, Arc<InMemoryVectorStore>) {
    let store = Arc::new(InMemoryVectorStore::new(DIM));
    let service = ProductIndexService::new(
        Arc::new(NullEmbeddingProvider::with_dimensions(DIM)),
        store.clone(),
    );
    (service, store)
}

// ============================================================================
// Text composition
// ============================================================================

#[test]
fn composition_order_is_name_description_category() {
    assert_eq!(
        compose_product_text("Desk Lamp", "Warm light", Some("home")),
        "Desk Lamp Warm light home"
    );
}

#[test]
fn missing_category_is_dropped() {
    assert_eq!(
        compose_product_text("Desk Lamp", "Warm light", None),
        "Desk Lamp Warm light"
    );
}

#[test]
fn empty_fields_are_dropped_not_joined() {
    assert_eq!(compose_product_text("Desk Lamp", "", Some("home")), "Desk Lamp home");
    assert_eq!(compose_product_text("Desk Lamp", "  ", None), "Desk Lamp");
}

// ============================================================================
// Embedding lifecycle
// ============================================================================

#[tokio::test]
async fn indexing_creates_exactly_one_row() {
    let (service, store) = service();
    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();

    assert_eq!(store.len(), 1);
    let row = store.get("p1", EntityKind::Product).await.unwrap().unwrap();
    assert_eq!(row.text_snapshot, "Desk Lamp Warm light home");
    assert_eq!(row.metadata.name, "Desk Lamp");
    assert_eq!(row.metadata.category.as_deref(), Some("home"));
    assert_eq!(row.embedding.vector.len(), DIM);
}

#[tokio::test]
async fn reindexing_unchanged_text_is_idempotent() {
    let (service, store) = service();
    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();
    let first = store.get("p1", EntityKind::Product).await.unwrap().unwrap();

    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();
    let second = store.get("p1", EntityKind::Product).await.unwrap().unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(first, second);
    assert_eq!(first.embedding.vector, second.embedding.vector);
}

#[tokio::test]
async fn unchanged_text_skips_the_provider_entirely() {
    // Seed a row with a working provider, then swap in a dead one: as long
    // as the text is unchanged, indexing still succeeds
    let store = Arc::new(InMemoryVectorStore::new(DIM));
    let seeder = ProductIndexService::new(
        Arc::new(NullEmbeddingProvider::with_dimensions(DIM)),
        store.clone(),
    );
    seeder
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();

    let service = ProductIndexService::new(Arc::new(FailingEmbeddingProvider), store);
    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();
}

#[tokio::test]
async fn edited_text_regenerates_and_keeps_created_at() {
    let (service, store) = service();
    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();
    let first = store.get("p1", EntityKind::Product).await.unwrap().unwrap();

    service
        .store_product_embedding("p1", "Desk Lamp", "Warm dimmable light", Some("home"))
        .await
        .unwrap();
    let second = store.get("p1", EntityKind::Product).await.unwrap().unwrap();

    assert_eq!(store.len(), 1);
    assert_ne!(first.embedding.vector, second.embedding.vector);
    assert_eq!(first.created_at, second.created_at);
    assert!(second.updated_at >= first.updated_at);
}

#[tokio::test]
async fn explicit_rebuild_propagates_provider_failures() {
    let store = Arc::new(InMemoryVectorStore::new(DIM));
    let service = ProductIndexService::new(Arc::new(FailingEmbeddingProvider), store.clone());

    let err = service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ProviderUnavailable { .. }));
    assert!(store.is_empty());
}

#[tokio::test]
async fn provider_store_width_mismatch_is_rejected() {
    // Provider emits 16-wide vectors into a 32-wide store
    let store = Arc::new(InMemoryVectorStore::new(DIM));
    let service = ProductIndexService::new(
        Arc::new(NullEmbeddingProvider::with_dimensions(16)),
        store.clone(),
    );

    let err = service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::DimensionMismatch { .. }));
    assert!(store.is_empty());
}

#[tokio::test]
async fn delete_removes_the_row_and_tolerates_absence() {
    let (service, store) = service();
    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", None)
        .await
        .unwrap();

    service.delete_product_embedding("p1").await.unwrap();
    assert!(store.is_empty());

    // Deleting again is a no-op, not an error
    service.delete_product_embedding("p1").await.unwrap();
}

// ============================================================================
// Related products
// ============================================================================

#[tokio::test]
async fn related_products_never_include_the_source() {
    let (service, _store) = service();
    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();
    service
        .store_product_embedding("p2", "Floor Lamp", "Soft light", Some("home"))
        .await
        .unwrap();
    service
        .store_product_embedding("p3", "Desk Lamp", "Warm light", Some("office"))
        .await
        .unwrap();

    // Accept everything: the exclusion, not the threshold, is under test
    let related = service.related_products("p1", 10, Some(-1.0)).await.unwrap();

    assert!(!related.is_empty());
    assert!(related.iter().all(|r| r.product_id != "p1"));
}

#[tokio::test]
async fn related_products_without_a_vector_is_empty() {
    let (service, _store) = service();
    let related = service.related_products("unknown", 10, Some(-1.0)).await.unwrap();
    assert!(related.is_empty());
}

#[tokio::test]
async fn related_products_respects_the_threshold() {
    let (service, _store) = service();
    service
        .store_product_embedding("p1", "Desk Lamp", "Warm light", Some("home"))
        .await
        .unwrap();
    service
        .store_product_embedding("p2", "Floor Lamp", "Soft light", Some("home"))
        .await
        .unwrap();

    // Nothing clears a threshold above perfect similarity
    let related = service.related_products("p1", 10, Some(1.1)).await.unwrap();
    assert!(related.is_empty());
}

// ============================================================================
// Post-commit hooks
// ============================================================================

fn sample_product() -> Product {
    Product {
        id: "p1".to_string(),
        name: "Desk Lamp".to_string(),
        description: "Warm light".to_string(),
        category: "home".to_string(),
        price: 25.0,
        seller_verified: true,
        created_at: Utc::now(),
        name_ar: None,
        name_zh: None,
        description_ar: None,
        description_zh: None,
    }
}

#[tokio::test]
async fn saved_hook_indexes_the_product() {
    let (service, store) = service();
    service.handle_product_saved(&sample_product()).await;

    let row = store.get("p1", EntityKind::Product).await.unwrap().unwrap();
    assert_eq!(row.text_snapshot, "Desk Lamp Warm light home");
}

#[tokio::test]
async fn saved_hook_swallows_provider_failures() {
    let store = Arc::new(InMemoryVectorStore::new(DIM));
    let service = ProductIndexService::new(Arc::new(FailingEmbeddingProvider), store.clone());

    // Must not propagate: the product mutation already committed
    service.handle_product_saved(&sample_product()).await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn deleted_hook_removes_the_row() {
    let (service, store) = service();
    service.handle_product_saved(&sample_product()).await;
    service.handle_product_deleted("p1").await;
    assert!(store.is_empty());
}
