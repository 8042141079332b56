//! Search-Related Value Objects
//!
//! Value objects describing a search request, its result shape, and the
//! predicates the relational product store understands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEARCH_LIMIT;

/// Ordering applied to a page of search results.
///
/// `Relevance` keeps the order produced by the retrieval path (semantic rank
/// or keyword tier); the explicit modes always win over relevance order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Keep the upstream retrieval order
    #[default]
    Relevance,
    /// Most recently created first
    Newest,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

/// Options accompanying one search request. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// BCP-47-ish locale tag selecting display fields and stop words
    /// (`"en"`, `"ar"`, `"zh"`)
    pub locale: String,
    /// Exact category filter
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Only products from verified sellers
    pub verified_only: bool,
    /// Result ordering
    pub sort: SortMode,
    /// Page size
    pub limit: usize,
    /// Page offset
    pub offset: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            category: None,
            min_price: None,
            max_price: None,
            verified_only: false,
            sort: SortMode::Relevance,
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
        }
    }
}

/// Value Object: Ranked Product Result
///
/// One product in a search result page, shaped for the requested locale.
///
/// ## Business Rules
///
/// - `similarity` is present only when the semantic path served the request
/// - Display fields fall back to the base (English) columns when the locale
///   has no translation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    /// Product identifier
    pub id: String,
    /// Locale-selected product name
    pub display_name: String,
    /// Locale-selected product description
    pub display_description: String,
    /// Product category
    pub category: String,
    /// Listed price
    pub price: f64,
    /// Whether the seller is verified
    pub seller_verified: bool,
    /// Cosine similarity to the query, semantic path only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
    /// When the product was listed
    pub created_at: DateTime<Utc>,
}

/// The uniform result shape returned by every retrieval path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// One page of matching products
    pub products: Vec<ProductSummary>,
    /// Post-filter, pre-pagination match count
    pub total: usize,
    /// Keywords the extractor derived from the query
    pub keywords: Vec<String>,
    /// Related query suggestions for the request locale
    pub suggestions: Vec<String>,
}

/// One "similar items" hit for a source product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedProduct {
    /// Identifier of the related product
    pub product_id: String,
    /// Cosine similarity to the source product's vector
    pub similarity: f32,
}

/// Predicate understood by the relational product store.
///
/// All set fields must hold for a product to match. `keywords_any` matches
/// when *any* keyword appears (case-insensitive substring) in the name,
/// description or category; `text_substring` matches name or description
/// only.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Restrict to this id set
    pub ids: Option<Vec<String>>,
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Only verified sellers
    pub verified_only: bool,
    /// Any-of case-insensitive substring match on name/description/category
    pub keywords_any: Option<Vec<String>>,
    /// Case-insensitive substring match on name/description
    pub text_substring: Option<String>,
}

/// Ordering the relational store applies before limit/offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductOrder {
    /// Storage order; callers re-rank
    #[default]
    Unspecified,
    /// `created_at` descending
    NewestFirst,
}
