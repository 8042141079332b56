//! # Souq Search
//!
//! Semantic product search for the Souq marketplace: embedding generation,
//! vector similarity retrieval, and a multilingual query-understanding and
//! ranking pipeline with keyword and substring fallbacks.
//!
//! This crate is the facade: it re-exports the layered crates so callers
//! depend on one name.
//!
//! ## Features
//!
//! - **Semantic search**: query and product text embedded through a
//!   provider port, matched by cosine similarity
//! - **Graceful degradation**: a dead or slow embedding provider degrades
//!   to keyword retrieval (with a curated intent-expansion table), then to
//!   plain substring matching - never to an error page
//! - **Multilingual**: English, Arabic and Chinese stop words, expansion
//!   triggers, suggestions and display-field localization
//! - **Explainable ranking**: a deterministic pipeline, not a learned
//!   ranker
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use souq::infrastructure::{build_search_stack, AppConfig};
//! use souq::providers::repository::InMemoryProductRepository;
//! use souq::domain::value_objects::SearchOptions;
//!
//! # async fn example() -> souq::domain::Result<()> {
//! let repo = Arc::new(InMemoryProductRepository::new());
//! let stack = build_search_stack(&AppConfig::default(), repo)?;
//!
//! let response = stack.search.search("fast laptop", &SearchOptions::default()).await?;
//! println!("{} products, {} suggestions", response.total, response.suggestions.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - core types, port traits and the error taxonomy
//! - `application` - the search orchestrator, index service, keyword
//!   extractor and suggestion generator
//! - `providers` - embedding, vector-store and repository adapters
//! - `infrastructure` - configuration, logging and wiring

/// Domain layer - core types, ports and errors
pub mod domain {
    pub use souq_domain::*;
}

/// Application layer - search orchestration and indexing use cases
pub mod application {
    pub use souq_application::*;
}

/// Provider layer - port adapters
pub mod providers {
    pub use souq_providers::*;
}

/// Infrastructure layer - config, logging and wiring
pub mod infrastructure {
    pub use souq_infrastructure::*;
}

// Re-export the commonly used surface at the crate root
pub use souq_application::use_cases::{ProductIndexService, SearchService, SearchTuning};
pub use souq_domain::entities::Product;
pub use souq_domain::error::{Error, Result};
pub use souq_domain::value_objects::{
    RelatedProduct, SearchOptions, SearchResponse, SortMode,
};
pub use souq_infrastructure::wiring::{build_search_stack, SearchStack};
