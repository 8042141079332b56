//! Language-aware keyword extraction
//!
//! Turns a raw multilingual query into a deduplicated keyword set: Unicode
//! tokenization, length and stop-word filtering, then the curated
//! intent-expansion table. A heuristic relevance layer, not an NLP
//! pipeline - the expansion table is the only intelligence, and the whole
//! thing is a pure function of `(query, locale)`.

pub mod expansion;
pub mod stopwords;

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use souq_domain::constants::MIN_KEYWORD_LENGTH;

use expansion::{default_table, ExpansionTable};
use stopwords::is_stop_word;

/// Keyword extractor over a fixed expansion table.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    table: &'static ExpansionTable,
}

impl KeywordExtractor {
    /// Extractor over the shipped expansion table
    pub fn new() -> Self {
        Self {
            table: default_table(),
        }
    }

    /// Extractor over a caller-provided table (tests, experiments)
    pub fn with_table(table: &'static ExpansionTable) -> Self {
        Self { table }
    }

    /// Extract the keyword set for a query.
    ///
    /// Output order is deterministic: literal tokens in first-seen order,
    /// then expansion keywords in table order. Empty input, or input that
    /// is nothing but stop words and short tokens, yields an empty set -
    /// the caller's signal to fall back further, never an error.
    pub fn extract(&self, query: &str, locale: &str) -> Vec<String> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut keywords: Vec<String> = Vec::new();

        for token in normalized.unicode_words() {
            if token.chars().count() < MIN_KEYWORD_LENGTH {
                continue;
            }
            if is_stop_word(token, locale) {
                continue;
            }
            if seen.insert(token) {
                keywords.push(token.to_string());
            }
        }

        // Expansion keywords add to, never replace, the literal tokens
        for keyword in self.table.expand(&normalized) {
            if seen.insert(keyword) {
                keywords.push(keyword.to_string());
            }
        }

        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
