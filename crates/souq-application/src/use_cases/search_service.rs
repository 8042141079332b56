//! Search orchestration
//!
//! The facade every caller goes through. One search request walks an
//! explicit chain of retrieval strategies:
//!
//! ```text
//! START -> SEMANTIC_ATTEMPT
//! SEMANTIC_ATTEMPT  --(embedding ok, hits > 0)--------> FILTER_AND_RANK
//! SEMANTIC_ATTEMPT  --(provider/store fails, 0 hits)--> KEYWORD_ATTEMPT
//! KEYWORD_ATTEMPT   --(keywords non-empty, hits > 0)--> FILTER_AND_RANK
//! KEYWORD_ATTEMPT   --(keywords empty or 0 hits)-----> SUBSTRING_ATTEMPT
//! SUBSTRING_ATTEMPT --(always)-----------------------> FILTER_AND_RANK
//! ```
//!
//! Every path ends in the same filter/sort/paginate stage and the same
//! result shaping, so callers get a uniform response whichever strategy
//! served them. Provider and vector-store read failures are absorbed here
//! (logged, never surfaced); only relational-store failures propagate.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use souq_domain::constants::{
    DEFAULT_EMBED_TIMEOUT_SECS, DEFAULT_MIN_SIMILARITY, DEFAULT_OVERFETCH_FACTOR,
    MAX_CANDIDATE_ROWS,
};
use souq_domain::entities::Product;
use souq_domain::error::{Error, Result};
use souq_domain::ports::{EmbeddingProvider, ProductRepository, VectorStore};
use souq_domain::value_objects::{
    EntityKind, ProductFilter, ProductOrder, ProductSummary, SearchOptions, SearchResponse,
    SimilarityQuery, SortMode,
};

use crate::keyword::KeywordExtractor;
use crate::suggestions::SuggestionGenerator;

/// Tunable knobs of the search pipeline.
///
/// The similarity threshold is a blunt recall cutoff validated against a
/// real catalog, not an invariant; all of these come from configuration in
/// production.
#[derive(Debug, Clone)]
pub struct SearchTuning {
    /// Cosine cutoff for semantic candidates
    pub min_similarity: f32,
    /// Semantic over-fetch multiplier compensating for post-filter drops
    pub overfetch_factor: usize,
    /// Budget for one embedding call before falling back
    pub embed_timeout: Duration,
    /// Cap on candidate rows pulled for keyword/substring ranking
    pub max_candidates: usize,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            min_similarity: DEFAULT_MIN_SIMILARITY,
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
            embed_timeout: Duration::from_secs(DEFAULT_EMBED_TIMEOUT_SECS),
            max_candidates: MAX_CANDIDATE_ROWS,
        }
    }
}

/// Which retrieval strategy served a request; logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPath {
    Semantic,
    Keyword,
    Substring,
}

impl SearchPath {
    fn as_str(self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Keyword => "keyword",
            Self::Substring => "substring",
        }
    }
}

/// Candidate set produced by one retrieval stage, before the shared
/// filter/rank stage.
struct Candidates {
    /// Products with their semantic similarity when the semantic path
    /// produced them
    rows: Vec<(Product, Option<f32>)>,
    /// Exact post-filter match count when the stage could compute one
    exact_total: Option<usize>,
}

/// The search facade.
///
/// Stateless per request: all mutable state lives behind the injected
/// ports, so concurrent searches need no synchronization here.
pub struct SearchService {
    embedding: Arc<dyn EmbeddingProvider>,
    vectors: Arc<dyn VectorStore>,
    products: Arc<dyn ProductRepository>,
    extractor: KeywordExtractor,
    suggestions: SuggestionGenerator,
    tuning: SearchTuning,
}

impl SearchService {
    /// Create a search service with default tuning
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        vectors: Arc<dyn VectorStore>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self::with_tuning(embedding, vectors, products, SearchTuning::default())
    }

    /// Create a search service with explicit tuning
    pub fn with_tuning(
        embedding: Arc<dyn EmbeddingProvider>,
        vectors: Arc<dyn VectorStore>,
        products: Arc<dyn ProductRepository>,
        tuning: SearchTuning,
    ) -> Self {
        Self {
            embedding,
            vectors,
            products,
            extractor: KeywordExtractor::new(),
            suggestions: SuggestionGenerator::new(),
            tuning,
        }
    }

    /// Run one search request through the fallback chain.
    ///
    /// Never fails while the relational store is reachable: an empty or
    /// stop-word-only query, a dead embedding provider or an unavailable
    /// vector index all degrade to a lower-quality result set, not an
    /// error.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse> {
        let trimmed = query.trim();
        let keywords = self.extractor.extract(trimmed, &options.locale);

        let mut served: Option<(SearchPath, Candidates)> = None;

        // SEMANTIC_ATTEMPT: skipped outright for empty queries (nothing to
        // embed)
        if !trimmed.is_empty() {
            match self.semantic_candidates(trimmed, options).await {
                Ok(candidates) if !candidates.rows.is_empty() => {
                    served = Some((SearchPath::Semantic, candidates));
                }
                Ok(_) => {
                    debug!(query = trimmed, "no semantic hits, trying keyword retrieval");
                }
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "semantic retrieval unavailable, falling back");
                }
                Err(err) => return Err(err),
            }
        }

        // KEYWORD_ATTEMPT: skipped when extraction found no signal
        if served.is_none() && !keywords.is_empty() {
            let candidates = self.keyword_candidates(&keywords, options).await?;
            if candidates.rows.is_empty() {
                debug!(?keywords, "no keyword hits, trying substring retrieval");
            } else {
                served = Some((SearchPath::Keyword, candidates));
            }
        }

        // SUBSTRING_ATTEMPT: the base case; an empty query matches the
        // whole catalog so filter-only browsing still works
        let (path, candidates) = match served {
            Some(served) => served,
            None => (
                SearchPath::Substring,
                self.substring_candidates(trimmed, options).await?,
            ),
        };

        let exact_total = candidates.exact_total;
        let (page, filtered_total) = filter_and_rank(candidates.rows, options);
        let total = exact_total.unwrap_or(filtered_total);

        debug!(
            path = path.as_str(),
            total,
            returned = page.len(),
            "search request served"
        );

        Ok(SearchResponse {
            products: page
                .into_iter()
                .map(|(product, similarity)| to_summary(product, similarity, &options.locale))
                .collect(),
            total,
            keywords,
            suggestions: self.suggestions.suggest(trimmed, &options.locale),
        })
    }

    /// SEMANTIC_ATTEMPT: embed the query, fetch nearest neighbors, load
    /// the catalog rows in semantic rank order.
    async fn semantic_candidates(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Candidates> {
        let embedding = match tokio::time::timeout(
            self.tuning.embed_timeout,
            self.embedding.embed(query),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(Error::provider_unavailable(format!(
                    "embedding call exceeded {:?}",
                    self.tuning.embed_timeout
                )));
            }
        };

        // Over-fetch so rows dropped by the structured filters below still
        // leave a full page; offset is included so later pages survive too
        let fetch_limit = (options.limit + options.offset).max(1) * self.tuning.overfetch_factor;
        let hits = self
            .vectors
            .search_similar(&SimilarityQuery {
                vector: embedding.vector,
                entity_kind: EntityKind::Product,
                limit: fetch_limit,
                min_similarity: self.tuning.min_similarity,
                exclude_entity_id: None,
            })
            .await?;

        if hits.is_empty() {
            return Ok(Candidates {
                rows: Vec::new(),
                exact_total: None,
            });
        }

        let ids: Vec<String> = hits.iter().map(|hit| hit.entity_id.clone()).collect();
        let mut by_id: HashMap<String, Product> = self
            .products
            .get_products_by_ids(&ids)
            .await?
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        // Preserve the semantic rank order; vectors without a live product
        // are stale index rows and are skipped
        let rows = hits
            .iter()
            .filter_map(|hit| {
                by_id
                    .remove(&hit.entity_id)
                    .map(|product| (product, Some(hit.similarity)))
            })
            .collect();

        Ok(Candidates {
            rows,
            exact_total: None,
        })
    }

    /// KEYWORD_ATTEMPT: any-keyword substring retrieval against the
    /// catalog, ranked by match tier then recency.
    async fn keyword_candidates(
        &self,
        keywords: &[String],
        options: &SearchOptions,
    ) -> Result<Candidates> {
        let filter = ProductFilter {
            keywords_any: Some(keywords.to_vec()),
            ..structural_filter(options)
        };

        let mut found = self
            .products
            .find_products(&filter, ProductOrder::NewestFirst, self.tuning.max_candidates, 0)
            .await?;
        let exact_total = self.products.count_products(&filter).await?;

        // Name matches outrank description matches outrank category-only
        // matches; the stable sort keeps newest-first inside each tier
        found.sort_by_key(|product| keyword_match_tier(product, keywords));

        Ok(Candidates {
            rows: found.into_iter().map(|product| (product, None)).collect(),
            exact_total: Some(exact_total),
        })
    }

    /// SUBSTRING_ATTEMPT: the guaranteed-to-terminate base case.
    async fn substring_candidates(
        &self,
        trimmed_query: &str,
        options: &SearchOptions,
    ) -> Result<Candidates> {
        let filter = ProductFilter {
            text_substring: Some(trimmed_query.to_string()),
            ..structural_filter(options)
        };

        let found = self
            .products
            .find_products(&filter, ProductOrder::NewestFirst, self.tuning.max_candidates, 0)
            .await?;
        let exact_total = self.products.count_products(&filter).await?;

        Ok(Candidates {
            rows: found.into_iter().map(|product| (product, None)).collect(),
            exact_total: Some(exact_total),
        })
    }
}

/// The structured part of the filter, shared by every path.
fn structural_filter(options: &SearchOptions) -> ProductFilter {
    ProductFilter {
        category: options.category.clone(),
        min_price: options.min_price,
        max_price: options.max_price,
        verified_only: options.verified_only,
        ..ProductFilter::default()
    }
}

/// Rank tier of a keyword match: 0 name, 1 description, 2 category-only.
fn keyword_match_tier(product: &Product, keywords: &[String]) -> u8 {
    let name = product.name.to_lowercase();
    let description = product.description.to_lowercase();
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    if lowered.iter().any(|k| name.contains(k)) {
        0
    } else if lowered.iter().any(|k| description.contains(k)) {
        1
    } else {
        2
    }
}

/// FILTER_AND_RANK: the shared tail of every path.
///
/// Applies category, price-range and verified filters, then the sort mode
/// (`Relevance` keeps the upstream order), then pagination. Returns the
/// page and the post-filter, pre-pagination count.
fn filter_and_rank(
    rows: Vec<(Product, Option<f32>)>,
    options: &SearchOptions,
) -> (Vec<(Product, Option<f32>)>, usize) {
    let mut filtered: Vec<(Product, Option<f32>)> = rows
        .into_iter()
        .filter(|(product, _)| passes_filters(product, options))
        .collect();

    match options.sort {
        SortMode::Relevance => {}
        SortMode::Newest => filtered.sort_by(|(a, _), (b, _)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortMode::PriceAsc => filtered.sort_by(|(a, _), (b, _)| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortMode::PriceDesc => filtered.sort_by(|(a, _), (b, _)| {
            b.price
                .partial_cmp(&a.price)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        }),
    }

    let total = filtered.len();
    let page = filtered
        .into_iter()
        .skip(options.offset)
        .take(options.limit)
        .collect();

    (page, total)
}

/// Structured filter predicate applied by the shared stage.
fn passes_filters(product: &Product, options: &SearchOptions) -> bool {
    if let Some(category) = &options.category {
        if &product.category != category {
            return false;
        }
    }
    if let Some(min) = options.min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = options.max_price {
        if product.price > max {
            return false;
        }
    }
    if options.verified_only && !product.seller_verified {
        return false;
    }
    true
}

/// Shape one product for the response, selecting display fields by locale.
fn to_summary(product: Product, similarity: Option<f32>, locale: &str) -> ProductSummary {
    ProductSummary {
        display_name: product.display_name(locale).to_string(),
        display_description: product.display_description(locale).to_string(),
        id: product.id,
        category: product.category,
        price: product.price,
        seller_verified: product.seller_verified,
        similarity,
        created_at: product.created_at,
    }
}
