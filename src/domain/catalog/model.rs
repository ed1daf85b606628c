//! Catalog domain entities

use rust_decimal::Decimal;

/// Product category with its discount policy
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    /// Category name (unique per catalog, not enforced)
    pub name: String,
    /// Discount percentage (0-100 expected; out-of-range values are
    /// accepted unvalidated and produce negative or inflated prices)
    pub discount: Decimal,
}

/// Catalog product with its category loaded
///
/// Price and description may be mutated in memory while serving a
/// single listing request; those changes are never written back to
/// storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    /// Units in stock; only products with stock > 0 are listed
    pub stock: i32,
    pub description: Option<String>,
    pub category_id: i32,
    pub category: Category,
}

/// Paginated result envelope
#[derive(Debug, Clone)]
pub struct PagedResult<T> {
    /// Items for the requested page
    pub items: Vec<T>,
    /// Total matching count across all pages
    pub total_count: u64,
    /// Requested page (1-based)
    pub page_index: u32,
    /// Requested page size
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_index: u32, page_size: u32) -> Self {
        Self {
            items,
            total_count,
            page_index,
            page_size,
        }
    }
}
