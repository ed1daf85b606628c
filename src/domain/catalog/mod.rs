pub mod model;
pub mod repository;

pub use model::{Category, PagedResult, Product};
pub use repository::ProductRepository;
