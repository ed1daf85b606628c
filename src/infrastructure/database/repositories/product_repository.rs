//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::domain::{Category, DomainError, DomainResult, Product, ProductRepository};
use crate::infrastructure::database::entities::{category, product};

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn entity_to_domain(p: product::Model, c: category::Model) -> Product {
    Product {
        id: p.id,
        name: p.name,
        price: p.price,
        stock: p.stock,
        description: p.description,
        category_id: p.category_id,
        category: Category {
            id: c.id,
            name: c.name,
            discount: c.discount,
        },
    }
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn count_in_stock(&self) -> DomainResult<u64> {
        product::Entity::find()
            .filter(product::Column::Stock.gt(0))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn fetch_in_stock_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Product>> {
        let rows = product::Entity::find()
            .filter(product::Column::Stock.gt(0))
            .find_also_related(category::Entity)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        rows.into_iter()
            .map(|(p, c)| {
                let c = c.ok_or_else(|| {
                    DomainError::Storage(format!(
                        "product {} references missing category {}",
                        p.id, p.category_id
                    ))
                })?;
                Ok(entity_to_domain(p, c))
            })
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Database, Set};
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::migrator::Migrator;

    async fn test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn insert_category(db: &DatabaseConnection, name: &str, discount: Decimal) -> i32 {
        let model = category::ActiveModel {
            name: Set(name.to_string()),
            discount: Set(discount),
            ..Default::default()
        };
        model.insert(db).await.unwrap().id
    }

    async fn insert_product(
        db: &DatabaseConnection,
        name: &str,
        price: i64,
        stock: i32,
        category_id: i32,
    ) {
        let model = product::ActiveModel {
            name: Set(name.to_string()),
            price: Set(Decimal::from(price)),
            stock: Set(stock),
            description: Set(None),
            category_id: Set(category_id),
            ..Default::default()
        };
        model.insert(db).await.unwrap();
    }

    #[tokio::test]
    async fn count_ignores_out_of_stock_rows() {
        let db = test_db().await;
        let mobile = insert_category(&db, "Mobile", Decimal::new(75, 1)).await;
        insert_product(&db, "IPhone16", 1000, 8, mobile).await;
        insert_product(&db, "IPhone13", 200, 0, mobile).await;

        let repo = SeaOrmProductRepository::new(db);
        assert_eq!(repo.count_in_stock().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn page_joins_category_and_respects_offset_limit() {
        let db = test_db().await;
        let mobile = insert_category(&db, "Mobile", Decimal::new(75, 1)).await;
        let laptop = insert_category(&db, "Laptop", Decimal::ZERO).await;
        insert_product(&db, "IPhone16", 1000, 8, mobile).await;
        insert_product(&db, "Zenbook", 3400, 12, laptop).await;
        insert_product(&db, "IPhone13", 200, 0, mobile).await;
        insert_product(&db, "Zenbook 14X", 5000, 11, laptop).await;

        let repo = SeaOrmProductRepository::new(db);

        let first = repo.fetch_in_stock_page(0, 2).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name, "IPhone16");
        assert_eq!(first[0].category.name, "Mobile");
        assert_eq!(first[0].category.discount, Decimal::new(75, 1));

        // out-of-stock IPhone13 is skipped entirely
        let second = repo.fetch_in_stock_page(2, 2).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "Zenbook 14X");
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_page() {
        let db = test_db().await;
        let repo = SeaOrmProductRepository::new(db);
        assert_eq!(repo.count_in_stock().await.unwrap(), 0);
        assert!(repo.fetch_in_stock_page(0, 10).await.unwrap().is_empty());
    }
}
