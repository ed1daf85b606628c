//! Product entity

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product model - a catalog item owned by one category
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique product ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Product name
    pub name: String,

    /// List price, decimal(18,2)
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,

    /// Units in stock
    pub stock: i32,

    /// Free-text description
    pub description: Option<String>,

    /// Owning category
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
