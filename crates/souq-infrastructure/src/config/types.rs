//! Configuration types
//!
//! Every tunable of the subsystem, with defaults that work offline: the
//! null embedding provider and the in-memory vector store need no
//! credentials or services.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use souq_domain::constants::{
    DEFAULT_EMBED_TIMEOUT_SECS, DEFAULT_MIN_SIMILARITY, DEFAULT_OVERFETCH_FACTOR,
    DEFAULT_RELATED_MIN_SIMILARITY, DEFAULT_SEARCH_LIMIT, EMBEDDING_DIMENSION, MAX_CANDIDATE_ROWS,
};

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Embedding provider settings
    pub embedding: EmbeddingConfig,
    /// Vector store settings
    pub vector_store: VectorStoreConfig,
    /// Search pipeline tuning
    pub search: SearchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name: `"null"` or `"openai"`
    pub provider: String,
    /// API key for remote providers
    pub api_key: Option<String>,
    /// Custom base URL for remote providers
    pub base_url: Option<String>,
    /// Model name for remote providers
    pub model: String,
    /// Per-request timeout for the provider's HTTP calls, in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "null".to_string(),
            api_key: None,
            base_url: None,
            model: "text-embedding-3-small".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Store name: `"memory"`
    pub provider: String,
    /// Fixed vector width of the store schema; embedding adapters pad or
    /// truncate to this
    pub dimensions: usize,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: "memory".to_string(),
            dimensions: EMBEDDING_DIMENSION,
        }
    }
}

/// Search pipeline tuning
///
/// The similarity thresholds are empirically chosen cutoffs to validate
/// against a real catalog, not invariants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Cosine cutoff for the search path
    pub min_similarity: f32,
    /// Cosine cutoff for related-product lookups
    pub related_min_similarity: f32,
    /// Semantic over-fetch multiplier
    pub overfetch_factor: usize,
    /// Budget for one embedding call before falling back, in seconds
    pub embed_timeout_secs: u64,
    /// Cap on candidate rows pulled for keyword/substring ranking
    pub max_candidates: usize,
    /// Default page size when the caller does not set one
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_similarity: DEFAULT_MIN_SIMILARITY,
            related_min_similarity: DEFAULT_RELATED_MIN_SIMILARITY,
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
            embed_timeout_secs: DEFAULT_EMBED_TIMEOUT_SECS,
            max_candidates: MAX_CANDIDATE_ROWS,
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON-structured lines instead of human-readable ones
    pub json_format: bool,
    /// Optional log file; daily rotation when set
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
