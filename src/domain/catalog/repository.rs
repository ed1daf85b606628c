//! Product repository interface

use async_trait::async_trait;

use super::model::Product;
use crate::domain::DomainResult;

/// Read access to the product catalog
///
/// Implementations must return products together with their loaded
/// category. A row referencing a missing category surfaces as a
/// storage error (the data-inconsistency path is not defended).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Count all products with stock > 0, independent of paging
    async fn count_in_stock(&self) -> DomainResult<u64>;

    /// Fetch one page of in-stock products in storage order,
    /// skipping `offset` rows and taking at most `limit`
    async fn fetch_in_stock_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Product>>;
}
