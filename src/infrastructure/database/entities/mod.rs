//! SeaORM entities for the catalog schema

pub mod category;
pub mod product;
