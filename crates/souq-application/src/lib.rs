//! # Souq Application
//!
//! Use cases of the product search subsystem:
//!
//! - [`use_cases::SearchService`] - the search facade: semantic retrieval
//!   with keyword and substring fallbacks, shared filtering/ranking and
//!   result shaping
//! - [`use_cases::ProductIndexService`] - embedding lifecycle on product
//!   create/update/delete and related-product lookups
//! - [`keyword`] - language-aware keyword extraction with the curated
//!   intent-expansion table
//! - [`suggestions`] - per-locale query suggestions

pub mod keyword;
pub mod suggestions;
pub mod use_cases;

pub use use_cases::{ProductIndexService, SearchService, SearchTuning};
