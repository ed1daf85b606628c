//! Pluggable pricing capabilities: discount strategy and product decorator
//!
//! Both are one-method traits injected into [`ProductService`]. The
//! strategy computes prices; it never decides *whether* a discount
//! applies - that policy lives in the orchestrator.
//!
//! [`ProductService`]: crate::application::ProductService

use rust_decimal::Decimal;

use crate::domain::Product;

/// Marker appended to the description of a discounted product
pub const DISCOUNT_MARKER: &str = " - Discount Applied";

/// Computes an adjusted price for a product
pub trait DiscountStrategy: Send + Sync {
    /// New price for the product, based on its loaded category
    fn discounted_price(&self, product: &Product) -> Decimal;
}

/// Percentage discount taken from the product's category
///
/// `price - price * (discount / 100)`, exact decimal arithmetic.
/// Discount percentages outside [0, 100] are applied as-is.
pub struct CategoryDiscount;

impl DiscountStrategy for CategoryDiscount {
    fn discounted_price(&self, product: &Product) -> Decimal {
        product.price - product.price * (product.category.discount / Decimal::ONE_HUNDRED)
    }
}

/// Post-processing step run after a discount was applied
pub trait ProductDecorator: Send + Sync {
    fn decorate(&self, product: &mut Product, original_price: Decimal);
}

/// Appends [`DISCOUNT_MARKER`] to the description when the price
/// actually changed
///
/// Not guarded against repeated invocation; the orchestrator calls it
/// at most once per product per request.
pub struct DiscountBadge;

impl ProductDecorator for DiscountBadge {
    fn decorate(&self, product: &mut Product, original_price: Decimal) {
        if original_price != product.price {
            let description = product.description.take().unwrap_or_default();
            product.description = Some(format!("{description}{DISCOUNT_MARKER}"));
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
