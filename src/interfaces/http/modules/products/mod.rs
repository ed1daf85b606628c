//! Product listing module

pub mod dto;
pub mod handlers;

pub use handlers::ProductsState;
