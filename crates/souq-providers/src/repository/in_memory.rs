//! In-memory product repository
//!
//! Backs the `ProductRepository` port for tests and local development.
//! Evaluates the same predicates the production relational store is
//! expected to evaluate, so orchestrator behavior can be validated without
//! a database.

use async_trait::async_trait;
use dashmap::DashMap;

use souq_domain::entities::Product;
use souq_domain::error::{Error, Result};
use souq_domain::ports::ProductRepository;
use souq_domain::value_objects::{ProductFilter, ProductOrder};

/// In-memory product catalog
pub struct InMemoryProductRepository {
    products: DashMap<String, Product>,
}

impl InMemoryProductRepository {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
        }
    }

    /// Insert or replace a product
    pub fn insert(&self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    /// Remove a product; no-op when absent
    pub fn remove(&self, id: &str) {
        self.products.remove(id);
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Filtered products in deterministic storage order (id ascending)
    fn matching(&self, filter: &ProductFilter) -> Vec<Product> {
        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|entry| matches_filter(entry.value(), filter))
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_products(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Product>> {
        let mut matches = self.matching(filter);

        if order == ProductOrder::NewestFirst {
            matches.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| a.id.cmp(&b.id))
            });
        }

        Ok(matches.into_iter().skip(offset).take(limit).collect())
    }

    async fn count_products(&self, filter: &ProductFilter) -> Result<usize> {
        Ok(self
            .products
            .iter()
            .filter(|entry| matches_filter(entry.value(), filter))
            .count())
    }

    async fn get_products_by_ids(&self, ids: &[String]) -> Result<Vec<Product>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.products.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        self.products
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found(format!("product {id}")))
    }
}

/// Evaluate the filter against one product
fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(ids) = &filter.ids {
        if !ids.iter().any(|id| id == &product.id) {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if &product.category != category {
            return false;
        }
    }
    if let Some(min) = filter.min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = filter.max_price {
        if product.price > max {
            return false;
        }
    }
    if filter.verified_only && !product.seller_verified {
        return false;
    }
    if let Some(keywords) = &filter.keywords_any {
        let name = product.name.to_lowercase();
        let description = product.description.to_lowercase();
        let category = product.category.to_lowercase();
        let any_hit = keywords.iter().any(|kw| {
            let kw = kw.to_lowercase();
            name.contains(&kw) || description.contains(&kw) || category.contains(&kw)
        });
        if !any_hit {
            return false;
        }
    }
    if let Some(text) = &filter.text_substring {
        let text = text.to_lowercase();
        if !product.name.to_lowercase().contains(&text)
            && !product.description.to_lowercase().contains(&text)
        {
            return false;
        }
    }
    true
}
