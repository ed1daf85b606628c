//! Domain layer: catalog entities, paging envelope and repository traits

pub mod catalog;
pub mod error;

pub use catalog::{Category, PagedResult, Product, ProductRepository};
pub use error::{DomainError, DomainResult};
