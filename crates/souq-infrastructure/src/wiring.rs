//! Provider wiring
//!
//! Turns configuration into live services. Provider selection is an
//! explicit name-keyed match: with two embedding providers and one store,
//! a plugin registry would be machinery without a payoff.

use std::sync::Arc;
use std::time::Duration;

use souq_application::use_cases::{ProductIndexService, SearchService, SearchTuning};
use souq_domain::error::{Error, Result};
use souq_domain::ports::{EmbeddingProvider, ProductRepository, VectorStore};
use souq_providers::embedding::{NullEmbeddingProvider, OpenAiEmbeddingProvider};
use souq_providers::vector_store::InMemoryVectorStore;

use crate::config::AppConfig;
use crate::error_ext::ErrorContext;

/// The wired search subsystem.
///
/// The relational product repository is owned by the surrounding
/// application and injected; everything else is built from configuration.
pub struct SearchStack {
    /// Read side: the search facade
    pub search: SearchService,
    /// Write side: embedding lifecycle and related products
    pub index: ProductIndexService,
}

/// Build the configured embedding provider
pub fn build_embedding_provider(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    match config.embedding.provider.as_str() {
        "null" => Ok(Arc::new(NullEmbeddingProvider::with_dimensions(
            config.vector_store.dimensions,
        ))),
        "openai" => {
            let api_key = config
                .embedding
                .api_key
                .clone()
                .ok_or_else(|| Error::configuration("OpenAI embedding provider requires an api_key"))?;
            let timeout = Duration::from_secs(config.embedding.timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .config_context("Failed to create HTTP client")?;

            Ok(Arc::new(OpenAiEmbeddingProvider::new(
                api_key,
                config.embedding.base_url.clone(),
                config.embedding.model.clone(),
                config.vector_store.dimensions,
                timeout,
                http_client,
            )))
        }
        other => Err(Error::configuration(format!(
            "Unknown embedding provider: {}",
            other
        ))),
    }
}

/// Build the configured vector store
pub fn build_vector_store(config: &AppConfig) -> Result<Arc<dyn VectorStore>> {
    match config.vector_store.provider.as_str() {
        "memory" => Ok(Arc::new(InMemoryVectorStore::new(
            config.vector_store.dimensions,
        ))),
        other => Err(Error::configuration(format!(
            "Unknown vector store provider: {}",
            other
        ))),
    }
}

/// Search tuning derived from configuration
pub fn search_tuning(config: &AppConfig) -> SearchTuning {
    SearchTuning {
        min_similarity: config.search.min_similarity,
        overfetch_factor: config.search.overfetch_factor,
        embed_timeout: Duration::from_secs(config.search.embed_timeout_secs),
        max_candidates: config.search.max_candidates,
    }
}

/// Build the full search stack around the host-owned product repository
pub fn build_search_stack(
    config: &AppConfig,
    products: Arc<dyn ProductRepository>,
) -> Result<SearchStack> {
    let embedding = build_embedding_provider(config)?;
    let vectors = build_vector_store(config)?;

    let search = SearchService::with_tuning(
        embedding.clone(),
        vectors.clone(),
        products,
        search_tuning(config),
    );
    let index = ProductIndexService::new(embedding, vectors)
        .with_related_min_similarity(config.search.related_min_similarity);

    Ok(SearchStack { search, index })
}
