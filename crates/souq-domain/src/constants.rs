//! Shared domain constants
//!
//! Tunable defaults live in `souq-infrastructure` configuration; the values
//! here are structural limits referenced from more than one crate.

/// Fixed width of every vector in the store.
///
/// Providers whose native dimensionality differs are padded with zeros or
/// truncated at the adapter boundary so the store schema stays fixed-width.
pub const EMBEDDING_DIMENSION: usize = 1536;

/// Default similarity cutoff for the search path.
pub const DEFAULT_MIN_SIMILARITY: f32 = 0.3;

/// Default similarity cutoff for related-product lookups.
pub const DEFAULT_RELATED_MIN_SIMILARITY: f32 = 0.5;

/// Over-fetch multiplier applied to semantic candidate retrieval, to
/// compensate for rows dropped later by structured filters.
pub const DEFAULT_OVERFETCH_FACTOR: usize = 2;

/// Default page size for search requests.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Hard cap on candidate rows pulled from the relational store for
/// keyword and substring ranking.
pub const MAX_CANDIDATE_ROWS: usize = 500;

/// Minimum token length kept by the keyword extractor.
pub const MIN_KEYWORD_LENGTH: usize = 3;

/// Maximum number of query suggestions returned per request.
pub const MAX_SUGGESTIONS: usize = 5;

/// Default timeout for a single embedding call, in seconds. A stalled
/// provider degrades to the keyword path instead of stalling the request.
pub const DEFAULT_EMBED_TIMEOUT_SECS: u64 = 3;
