use crate::entities::Product;
use crate::error::Result;
use crate::value_objects::{ProductFilter, ProductOrder};
use async_trait::async_trait;

/// Relational Product Store Interface
///
/// The catalog's source of truth, owned outside this subsystem. Search
/// reads through it on every path: the vector store never carries enough
/// fields (price, verification) to answer a query alone.
///
/// A failure here is fatal for the request: there is no degradation level
/// below "no catalog data". It surfaces as [`Error::Database`].
///
/// [`Error::Database`]: crate::error::Error::Database
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products matching `filter`, ordered, then limited/offset.
    async fn find_products(
        &self,
        filter: &ProductFilter,
        order: ProductOrder,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Product>>;

    /// Number of products matching `filter`.
    async fn count_products(&self, filter: &ProductFilter) -> Result<usize>;

    /// Products for the given ids, in unspecified order; unknown ids are
    /// skipped, not an error.
    async fn get_products_by_ids(&self, ids: &[String]) -> Result<Vec<Product>>;

    /// A single product by id; [`Error::NotFound`] when absent.
    ///
    /// [`Error::NotFound`]: crate::error::Error::NotFound
    async fn get_product(&self, id: &str) -> Result<Product>;
}
