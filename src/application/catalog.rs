//! Product listing business logic service

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::application::pricing::{DiscountStrategy, ProductDecorator};
use crate::domain::{DomainResult, PagedResult, Product, ProductRepository};

/// Category eligible for the automatic discount
const DISCOUNT_CATEGORY: &str = "Mobile";

/// Minimum stock required for a product to qualify for the discount
const DISCOUNT_MIN_STOCK: i32 = 2;

/// Service for listing catalog products
///
/// Orchestrates one read path: count eligible rows, fetch one page,
/// conditionally discount and decorate each product, wrap in a paged
/// envelope. Price/description changes are request-scoped and never
/// persisted.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
    discount: Arc<dyn DiscountStrategy>,
    decorator: Arc<dyn ProductDecorator>,
}

impl ProductService {
    pub fn new(
        repo: Arc<dyn ProductRepository>,
        discount: Arc<dyn DiscountStrategy>,
        decorator: Arc<dyn ProductDecorator>,
    ) -> Self {
        Self {
            repo,
            discount,
            decorator,
        }
    }

    /// List one page of in-stock products
    ///
    /// `page_index` and `page_size` must both be >= 1; the HTTP
    /// boundary validates this before calling.
    pub async fn list_products(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> DomainResult<PagedResult<Product>> {
        let total_count = self.repo.count_in_stock().await?;

        let offset = (page_index as u64 - 1) * page_size as u64;
        let mut products = self
            .repo
            .fetch_in_stock_page(offset, page_size as u64)
            .await?;

        for product in &mut products {
            self.apply_discount_and_decorate(product);
        }

        Ok(PagedResult::new(products, total_count, page_index, page_size))
    }

    fn apply_discount_and_decorate(&self, product: &mut Product) {
        let original_price = product.price;

        if product.category.name == DISCOUNT_CATEGORY
            && product.stock >= DISCOUNT_MIN_STOCK
            && product.category.discount > Decimal::ZERO
        {
            product.price = self.discount.discounted_price(product);
            info!(
                product_id = product.id,
                original_price = %original_price,
                new_price = %product.price,
                discount_percent = %product.category.discount,
                "Discount applied to product"
            );
            self.decorator.decorate(product, original_price);
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::pricing::{CategoryDiscount, DiscountBadge};
    use crate::domain::Category;

    /// In-memory repository over a fixed product list
    struct FixedProducts(Vec<Product>);

    #[async_trait]
    impl ProductRepository for FixedProducts {
        async fn count_in_stock(&self) -> DomainResult<u64> {
            Ok(self.0.iter().filter(|p| p.stock > 0).count() as u64)
        }

        async fn fetch_in_stock_page(
            &self,
            offset: u64,
            limit: u64,
        ) -> DomainResult<Vec<Product>> {
            Ok(self
                .0
                .iter()
                .filter(|p| p.stock > 0)
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }
    }

    fn category(name: &str, discount: Decimal) -> Category {
        Category {
            id: 1,
            name: name.to_string(),
            discount,
        }
    }

    fn product(id: i32, price: i64, stock: i32, category: Category) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            price: Decimal::from(price),
            stock,
            description: None,
            category_id: category.id,
            category,
        }
    }

    fn service(products: Vec<Product>) -> ProductService {
        ProductService::new(
            Arc::new(FixedProducts(products)),
            Arc::new(CategoryDiscount),
            Arc::new(DiscountBadge),
        )
    }

    #[tokio::test]
    async fn discount_and_decoration_scenario() {
        let svc = service(vec![
            product(1, 100, 5, category("Mobile", Decimal::from(10))),
            product(2, 200, 3, category("Laptop", Decimal::ZERO)),
            product(3, 150, 0, category("Mobile", Decimal::from(10))),
            product(4, 300, 7, category("Mobile", Decimal::from(5))),
        ]);

        let page = svc.list_products(1, 3).await.unwrap();

        // id 3 is out of stock and excluded everywhere
        let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert_eq!(page.total_count, 3);

        assert_eq!(page.items[0].price, Decimal::from(90));
        assert_eq!(page.items[1].price, Decimal::from(200));
        assert_eq!(page.items[2].price, Decimal::from(285));

        assert!(page.items[0]
            .description
            .as_deref()
            .unwrap()
            .ends_with(" - Discount Applied"));
        assert_eq!(page.items[1].description, None);
    }

    #[tokio::test]
    async fn total_count_is_independent_of_paging() {
        let svc = service(vec![
            product(1, 100, 5, category("Mobile", Decimal::from(10))),
            product(2, 200, 3, category("Laptop", Decimal::ZERO)),
            product(3, 150, 2, category("Accessories", Decimal::ZERO)),
        ]);

        let page = svc.list_products(2, 2).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 3);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.page_index, 2);
        assert_eq!(page.page_size, 2);
    }

    #[tokio::test]
    async fn page_never_exceeds_page_size() {
        let svc = service(
            (1..=7)
                .map(|id| product(id, 100, 1, category("Accessories", Decimal::ZERO)))
                .collect(),
        );

        let page = svc.list_products(1, 4).await.unwrap();
        assert_eq!(page.items.len(), 4);

        let beyond = svc.list_products(3, 4).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_count, 7);
    }

    #[tokio::test]
    async fn low_stock_mobile_is_not_discounted() {
        // stock >= 2 is part of the eligibility predicate
        let svc = service(vec![product(
            1,
            100,
            1,
            category("Mobile", Decimal::new(75, 1)),
        )]);

        let page = svc.list_products(1, 10).await.unwrap();
        assert_eq!(page.items[0].price, Decimal::from(100));
        assert_eq!(page.items[0].description, None);
    }

    #[tokio::test]
    async fn zero_discount_mobile_is_not_discounted() {
        let svc = service(vec![product(1, 100, 5, category("Mobile", Decimal::ZERO))]);

        let page = svc.list_products(1, 10).await.unwrap();
        assert_eq!(page.items[0].price, Decimal::from(100));
        assert_eq!(page.items[0].description, None);
    }

    #[tokio::test]
    async fn non_mobile_category_is_never_discounted() {
        let svc = service(vec![product(
            1,
            100,
            5,
            category("Laptop", Decimal::from(50)),
        )]);

        let page = svc.list_products(1, 10).await.unwrap();
        assert_eq!(page.items[0].price, Decimal::from(100));
    }

    #[tokio::test]
    async fn fractional_discount_is_exact() {
        let svc = service(vec![product(
            1,
            100,
            10,
            category("Mobile", Decimal::new(75, 1)),
        )]);

        let page = svc.list_products(1, 10).await.unwrap();
        assert_eq!(page.items[0].price, Decimal::new(925, 1));
    }

    #[tokio::test]
    async fn only_in_stock_products_are_returned() {
        let svc = service(vec![
            product(1, 100, 0, category("Mobile", Decimal::new(75, 1))),
            product(2, 200, 5, category("Laptop", Decimal::ZERO)),
        ]);

        let page = svc.list_products(1, 10).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].price, Decimal::from(200));
        assert_eq!(page.total_count, 1);
    }
}
