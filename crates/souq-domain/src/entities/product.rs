//! Product entity
//!
//! Read model of a marketplace product as the relational store returns it.
//! This subsystem never mutates products; it reads them to rank, filter and
//! shape results, and derives embedding text from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A marketplace product listing.
///
/// The base `name`/`description` columns are the canonical (English) text;
/// the optional `_ar`/`_zh` columns hold seller-provided translations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier, unique within the catalog
    pub id: String,
    /// Canonical product name
    pub name: String,
    /// Canonical product description
    pub description: String,
    /// Category slug
    pub category: String,
    /// Listed price
    pub price: f64,
    /// Whether the seller passed verification
    pub seller_verified: bool,
    /// When the product was listed
    pub created_at: DateTime<Utc>,
    /// Arabic name, when the seller provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    /// Chinese name, when the seller provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_zh: Option<String>,
    /// Arabic description, when the seller provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    /// Chinese description, when the seller provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_zh: Option<String>,
}

impl Product {
    /// Name to display for the given locale, falling back to the base
    /// column when no translation exists.
    pub fn display_name(&self, locale: &str) -> &str {
        match locale {
            "ar" => self.name_ar.as_deref().unwrap_or(&self.name),
            "zh" => self.name_zh.as_deref().unwrap_or(&self.name),
            _ => &self.name,
        }
    }

    /// Description to display for the given locale, falling back to the
    /// base column when no translation exists.
    pub fn display_description(&self, locale: &str) -> &str {
        match locale {
            "ar" => self.description_ar.as_deref().unwrap_or(&self.description),
            "zh" => self.description_zh.as_deref().unwrap_or(&self.description),
            _ => &self.description,
        }
    }
}
