//! Category entity

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category model - groups products and carries the discount percentage
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique category ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Category name (e.g., "Mobile", "Laptop")
    pub name: String,

    /// Discount percentage applied to eligible products, decimal(18,2)
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub discount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
