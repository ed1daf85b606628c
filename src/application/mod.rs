//! Application layer: listing orchestration and pluggable pricing capabilities

pub mod catalog;
pub mod pricing;

pub use catalog::ProductService;
pub use pricing::{CategoryDiscount, DiscountBadge, DiscountStrategy, ProductDecorator};
