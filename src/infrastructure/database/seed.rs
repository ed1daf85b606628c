//! Starter catalog seed
//!
//! Inserts a fixed catalog (4 categories, 8 products) on first start.
//! Both inserts are guarded by an emptiness check, so re-running on an
//! already seeded database is a no-op.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use super::entities::{category, product};

pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), DbErr> {
    if category::Entity::find().count(db).await? == 0 {
        let categories = [
            ("Mobile", Decimal::new(75, 1)),
            ("Laptop", Decimal::ZERO),
            ("Fruits and Vegetables", Decimal::ZERO),
            ("Accessories", Decimal::ZERO),
        ]
        .map(|(name, discount)| category::ActiveModel {
            name: Set(name.to_string()),
            discount: Set(discount),
            ..Default::default()
        });

        category::Entity::insert_many(categories).exec(db).await?;
        info!("Seeded starter categories");
    }

    if product::Entity::find().count(db).await? == 0 {
        let products = [
            ("IPhone16", 1, 8, 1_000_000),
            ("IPhone13", 1, 1, 200_000),
            ("Apple", 3, 300, 43_000),
            ("cherry", 3, 100, 12_800),
            ("Sunglasses", 4, 20, 33_000),
            ("Hat", 4, 0, 0),
            ("Asus Zenbook flip 13", 2, 12, 3_400_000),
            ("Asus Zenbook 14X", 2, 11, 12_000_000),
        ]
        .map(|(name, category_id, stock, price)| product::ActiveModel {
            name: Set(name.to_string()),
            price: Set(Decimal::from(price)),
            stock: Set(stock),
            description: Set(None),
            category_id: Set(category_id),
            ..Default::default()
        });

        product::Entity::insert_many(products).exec(db).await?;
        info!("Seeded starter products");
    }

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::migrator::Migrator;

    #[tokio::test]
    async fn seed_fills_empty_catalog_once() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        seed_catalog(&db).await.unwrap();
        seed_catalog(&db).await.unwrap();

        assert_eq!(category::Entity::find().count(&db).await.unwrap(), 4);
        assert_eq!(product::Entity::find().count(&db).await.unwrap(), 8);

        // Hat is seeded out of stock
        let hat = product::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.name == "Hat")
            .unwrap();
        assert_eq!(hat.stock, 0);
        assert_eq!(hat.price, Decimal::ZERO);
    }
}
