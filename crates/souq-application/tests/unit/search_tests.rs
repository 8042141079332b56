//! Tests for the search orchestrator
//!
//! These run real providers (NullEmbeddingProvider, InMemoryVectorStore,
//! InMemoryProductRepository) to validate actual retrieval behavior, not
//! mocked responses. Stubs appear only where a failure mode is the thing
//! under test.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use souq_application::use_cases::{ProductIndexService, SearchService, SearchTuning};
use souq_domain::entities::Product;
use souq_domain::error::{Error, Result};
use souq_domain::ports::{EmbeddingProvider, ProductRepository};
use souq_domain::value_objects::{
    Embedding, ProductFilter, ProductOrder, SearchOptions, SortMode,
};
use souq_providers::embedding::NullEmbeddingProvider;
use souq_providers::repository::InMemoryProductRepository;
use souq_providers::vector_store::InMemoryVectorStore;

const DIM: usize = 32;

/// Provider stub that is always down.
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

/// Provider stub that answers far too slowly.
struct SlowEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for SlowEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        tokio::time::sleep(Duration::from_millis(250)).await;
        Ok(texts
            .iter()
            .map(|_| Embedding {
                vector: vec![1.0; DIM],
                model: "slow".to_string(),
                dimensions: DIM,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        DIM
    }

    fn provider_name(&self) -> &str {
        "slow"
    }
}

/// Repository stub for the one failure that must stay fatal.
struct UnreachableRepository;

#[async_trait]
impl ProductRepository for UnreachableRepository {
    async fn find_products(
        &self,
        _filter: &ProductFilter,
        _order: ProductOrder,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<Product>> {
        Err(Error::database("catalog unreachable"))
    }

    async fn count_products(&self, _filter: &ProductFilter) -> Result<usize> {
        Err(Error::database("catalog unreachable"))
    }

    async fn get_products_by_ids(&self, _ids: &[String]) -> Result<Vec<Product>> {
        Err(Error::database("catalog unreachable"))
    }

    async fn get_product(&self, _id: &str) -> Result<Product> {
        Err(Error::database("catalog unreachable"))
    }
}

fn product(id: &str, name: &str, description: &str, category: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        seller_verified: true,
        created_at: Utc::now(),
        name_ar: None,
        name_zh: None,
        description_ar: None,
        description_zh: None,
    }
}

/// Search service over a dead embedding provider: every request exercises
/// the keyword/substring fallbacks.
fn keyword_only_service(repo: Arc<InMemoryProductRepository>) -> SearchService {
    SearchService::new(
        Arc::new(FailingEmbeddingProvider),
        Arc::new(InMemoryVectorStore::new(DIM)),
        repo,
    )
}

/// Fully wired service plus its index side, sharing one vector store.
fn semantic_service(repo: Arc<InMemoryProductRepository>) -> (SearchService, ProductIndexService) {
    let embedding: Arc<dyn EmbeddingProvider> =
        Arc::new(NullEmbeddingProvider::with_dimensions(DIM));
    let store = Arc::new(InMemoryVectorStore::new(DIM));
    let search = SearchService::new(embedding.clone(), store.clone(), repo);
    let index = ProductIndexService::new(embedding, store);
    (search, index)
}

// ============================================================================
// Spec scenarios
// ============================================================================

#[tokio::test]
async fn expansion_keywords_find_products_when_embedding_is_down() {
    // "fast" never appears in the product text; the expansion table maps
    // it to "laptop", which does
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product(
        "p1",
        "Gaming Laptop Pro",
        "High-refresh display",
        "electronics",
        1499.0,
    ));

    let service = keyword_only_service(repo);
    let response = service
        .search("fast", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.products[0].id, "p1");
    assert!(response.keywords.contains(&"laptop".to_string()));
}

#[tokio::test]
async fn empty_query_over_empty_catalog_returns_defaults() {
    let service = keyword_only_service(Arc::new(InMemoryProductRepository::new()));
    let response = service.search("", &SearchOptions::default()).await.unwrap();

    assert!(response.products.is_empty());
    assert_eq!(response.total, 0);
    assert!(!response.suggestions.is_empty());
}

#[tokio::test]
async fn empty_query_with_price_filter_browses_the_catalog() {
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product("cheap", "Desk Lamp", "Warm light", "home", 10.0));
    repo.insert(product("dear", "Espresso Machine", "Dual boiler", "home", 1000.0));

    let service = keyword_only_service(repo);
    let options = SearchOptions {
        min_price: Some(5.0),
        max_price: Some(50.0),
        ..SearchOptions::default()
    };
    let response = service.search("", &options).await.unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.products[0].id, "cheap");
}

#[tokio::test]
async fn provider_outage_never_surfaces_to_the_caller() {
    let repo = Arc::new(InMemoryProductRepository::new());
    let service = keyword_only_service(repo);

    let response = service
        .search("anything", &SearchOptions::default())
        .await
        .unwrap();

    assert!(response.products.is_empty());
    assert_eq!(response.total, 0);
}

#[tokio::test]
async fn semantic_path_serves_indexed_products_with_scores() {
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product(
        "p1",
        "Trail Backpack",
        "40 liter waterproof",
        "outdoors",
        80.0,
    ));
    let (search, index) = semantic_service(repo);

    index
        .store_product_embedding("p1", "Trail Backpack", "40 liter waterproof", Some("outdoors"))
        .await
        .unwrap();

    // The deterministic null provider embeds identical text identically,
    // so querying the composed product text is an exact semantic match
    let response = search
        .search("Trail Backpack 40 liter waterproof outdoors", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(response.products[0].id, "p1");
    let similarity = response.products[0].similarity.expect("semantic score");
    assert!((similarity - 1.0).abs() < 1e-5);
}

// ============================================================================
// Fallback chain
// ============================================================================

#[tokio::test]
async fn slow_provider_degrades_to_keyword_path() {
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product(
        "p1",
        "Mechanical Keyboard",
        "Hot-swappable switches",
        "electronics",
        120.0,
    ));

    let service = SearchService::with_tuning(
        Arc::new(SlowEmbeddingProvider),
        Arc::new(InMemoryVectorStore::new(DIM)),
        repo,
        SearchTuning {
            embed_timeout: Duration::from_millis(10),
            ..SearchTuning::default()
        },
    );

    let response = service
        .search("keyboard", &SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(response.total, 1);
    // Keyword path carries no similarity scores
    assert!(response.products[0].similarity.is_none());
}

#[tokio::test]
async fn stop_word_query_falls_through_to_substring() {
    // "the" is a stop word, so keyword extraction yields nothing; the raw
    // substring still matches the product name
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product(
        "p1",
        "The Persian Rug",
        "Hand-knotted wool",
        "home",
        340.0,
    ));
    repo.insert(product("p2", "Desk Lamp", "Warm light", "home", 25.0));

    let service = keyword_only_service(repo);
    let response = service
        .search("the", &SearchOptions::default())
        .await
        .unwrap();

    assert!(response.keywords.is_empty());
    assert_eq!(response.total, 1);
    assert_eq!(response.products[0].id, "p1");
}

#[tokio::test]
async fn stale_vector_rows_fall_through_without_results() {
    // A vector row whose product no longer exists must not produce a hit
    let repo = Arc::new(InMemoryProductRepository::new());
    let (search, index) = semantic_service(repo.clone());

    repo.insert(product("ghost", "Retired Gadget", "Gone", "electronics", 5.0));
    index
        .store_product_embedding("ghost", "Retired Gadget", "Gone", Some("electronics"))
        .await
        .unwrap();
    repo.remove("ghost");

    let response = search
        .search("Retired Gadget Gone electronics", &SearchOptions::default())
        .await
        .unwrap();

    assert!(response.products.is_empty());
}

#[tokio::test]
async fn catalog_outage_is_fatal() {
    let service = SearchService::new(
        Arc::new(FailingEmbeddingProvider),
        Arc::new(InMemoryVectorStore::new(DIM)),
        Arc::new(UnreachableRepository),
    );

    let err = service
        .search("lamp", &SearchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Database { .. }));
}

#[tokio::test]
async fn keyword_name_matches_outrank_description_matches() {
    let repo = Arc::new(InMemoryProductRepository::new());
    let mut desc_match = product(
        "desc",
        "Ergonomic Chair",
        "Pairs well with any lamp",
        "home",
        300.0,
    );
    // Newer than the name match, but a lower tier
    desc_match.created_at = Utc::now() + chrono::Duration::hours(1);
    repo.insert(desc_match);
    repo.insert(product("name", "Brass Lamp", "Vintage finish", "home", 60.0));

    let service = keyword_only_service(repo);
    let response = service
        .search("lamp", &SearchOptions::default())
        .await
        .unwrap();

    let ids: Vec<&str> = response.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["name", "desc"]);
}

// ============================================================================
// Shared filter / sort / pagination stage
// ============================================================================

#[tokio::test]
async fn category_filter_holds_for_every_result() {
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product("e1", "Lamp One", "Desk light", "electronics", 20.0));
    repo.insert(product("h1", "Lamp Two", "Floor light", "home", 30.0));

    let service = keyword_only_service(repo);
    let options = SearchOptions {
        category: Some("home".to_string()),
        ..SearchOptions::default()
    };
    let response = service.search("lamp", &options).await.unwrap();

    assert_eq!(response.total, 1);
    assert!(response.products.iter().all(|p| p.category == "home"));
}

#[tokio::test]
async fn verified_only_filter_drops_unverified_sellers() {
    let repo = Arc::new(InMemoryProductRepository::new());
    let mut unverified = product("u1", "Budget Lamp", "No-name brand", "home", 9.0);
    unverified.seller_verified = false;
    repo.insert(unverified);
    repo.insert(product("v1", "Studio Lamp", "Color accurate", "home", 90.0));

    let service = keyword_only_service(repo);
    let options = SearchOptions {
        verified_only: true,
        ..SearchOptions::default()
    };
    let response = service.search("lamp", &options).await.unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.products[0].id, "v1");
}

#[tokio::test]
async fn explicit_sort_overrides_relevance_order() {
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product("mid", "Lamp Mid", "Desk light", "home", 50.0));
    repo.insert(product("low", "Lamp Low", "Desk light", "home", 10.0));
    repo.insert(product("high", "Lamp High", "Desk light", "home", 90.0));

    let service = keyword_only_service(repo);

    let asc = SearchOptions {
        sort: SortMode::PriceAsc,
        ..SearchOptions::default()
    };
    let response = service.search("lamp", &asc).await.unwrap();
    let prices: Vec<f64> = response.products.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![10.0, 50.0, 90.0]);

    let desc = SearchOptions {
        sort: SortMode::PriceDesc,
        ..SearchOptions::default()
    };
    let response = service.search("lamp", &desc).await.unwrap();
    let prices: Vec<f64> = response.products.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![90.0, 50.0, 10.0]);
}

#[tokio::test]
async fn pagination_slices_after_filtering() {
    let repo = Arc::new(InMemoryProductRepository::new());
    for i in 0..5 {
        repo.insert(product(
            &format!("p{i}"),
            &format!("Lamp {i}"),
            "Desk light",
            "home",
            10.0 + i as f64,
        ));
    }

    let service = keyword_only_service(repo);
    let options = SearchOptions {
        sort: SortMode::PriceAsc,
        limit: 2,
        offset: 2,
        ..SearchOptions::default()
    };
    let response = service.search("lamp", &options).await.unwrap();

    assert_eq!(response.total, 5);
    let ids: Vec<&str> = response.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p3"]);
}

#[tokio::test]
async fn whitespace_only_query_behaves_like_empty() {
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product("p1", "Desk Lamp", "Warm light", "home", 25.0));

    let service = keyword_only_service(repo);
    let response = service
        .search("   \t ", &SearchOptions::default())
        .await
        .unwrap();

    // Matches the whole catalog: filter-only browsing
    assert_eq!(response.total, 1);
    assert!(response.keywords.is_empty());
}

// ============================================================================
// Result shaping
// ============================================================================

#[tokio::test]
async fn display_fields_follow_the_request_locale() {
    let repo = Arc::new(InMemoryProductRepository::new());
    let mut p = product("p1", "Desk Lamp", "Warm light", "home", 25.0);
    p.name_ar = Some("مصباح مكتب".to_string());
    repo.insert(p);

    let service = keyword_only_service(repo);
    let options = SearchOptions {
        locale: "ar".to_string(),
        ..SearchOptions::default()
    };
    let response = service.search("lamp", &options).await.unwrap();

    assert_eq!(response.products[0].display_name, "مصباح مكتب");
    // No Arabic description was provided: base field fallback
    assert_eq!(response.products[0].display_description, "Warm light");
}

#[tokio::test]
async fn response_shape_is_uniform_across_paths() {
    let repo = Arc::new(InMemoryProductRepository::new());
    repo.insert(product("p1", "Desk Lamp", "Warm light", "home", 25.0));
    let service = keyword_only_service(repo);

    for query in ["lamp", "the", ""] {
        let response = service.search(query, &SearchOptions::default()).await.unwrap();
        // keywords and suggestions are always present, possibly empty
        assert!(response.total >= response.products.len());
        let _ = response.keywords;
        let _ = response.suggestions;
    }
}
