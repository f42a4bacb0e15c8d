//! Product orchestration.

use crate::error::AppError;
use crate::models::Product;
use crate::repo::ProductRepository;
use crate::validation::{is_valid_id, validate, NEW_PRODUCT_RULES, UPDATE_PRODUCT_RULES};

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let products = self.repo.get_all().await?;
        if products.is_empty() {
            return Err(AppError::NotFound("no products exist".into()));
        }
        Ok(products)
    }

    pub async fn get_by_id(&self, prod_id: i64) -> Result<Product, AppError> {
        if !is_valid_id(prod_id) {
            return Err(AppError::BadRequest(format!(
                "{prod_id} is not a valid product id"
            )));
        }
        self.repo
            .get_by_id(prod_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {prod_id}")))
    }

    pub async fn add(&self, new_product: Product) -> Result<Product, AppError> {
        validate(&new_product, NEW_PRODUCT_RULES)?;
        self.repo.add(new_product).await
    }

    pub async fn update(&self, updated: Product) -> Result<bool, AppError> {
        validate(&updated, UPDATE_PRODUCT_RULES)?;
        self.repo.update(&updated).await
    }

    pub async fn delete_by_id(&self, prod_id: i64) -> Result<bool, AppError> {
        if !is_valid_id(prod_id) {
            return Err(AppError::BadRequest(format!(
                "{prod_id} is not a valid product id"
            )));
        }
        self.repo.delete_by_id(prod_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::CrudRepository;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeProductRepo {
        products: Vec<Product>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeProductRepo {
        fn with_products(products: Vec<Product>) -> Self {
            Self { products, calls: AtomicUsize::new(0), fail: false }
        }

        fn empty() -> Self {
            Self::with_products(Vec::new())
        }

        fn failing() -> Self {
            Self { products: Vec::new(), calls: AtomicUsize::new(0), fail: true }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn tick(&self) -> Result<(), AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::Internal(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CrudRepository<Product> for FakeProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, AppError> {
            self.tick()?;
            Ok(self.products.clone())
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
            self.tick()?;
            Ok(self.products.iter().find(|p| p.prod_id == id).cloned())
        }

        async fn add(&self, new: Product) -> Result<Product, AppError> {
            self.tick()?;
            Ok(Product { prod_id: self.products.len() as i64 + 1, ..new })
        }

        async fn update(&self, _updated: &Product) -> Result<bool, AppError> {
            self.tick()?;
            Ok(true)
        }

        async fn delete_by_id(&self, _id: i64) -> Result<bool, AppError> {
            self.tick()?;
            Ok(true)
        }
    }

    impl ProductRepository for FakeProductRepo {}

    fn widget() -> Product {
        Product {
            prod_id: 1,
            name: "Widget".into(),
            description: "A standard widget".into(),
            cost: Decimal::new(1099, 2),
            created_time: None,
        }
    }

    #[tokio::test]
    async fn get_all_preserves_row_count() {
        let mut second = widget();
        second.prod_id = 2;
        let sut = ProductService::new(FakeProductRepo::with_products(vec![widget(), second]));

        let result = sut.get_all().await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn get_all_with_no_rows_is_not_found() {
        let sut = ProductService::new(FakeProductRepo::empty());

        let err = sut.get_all().await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_by_id_rejects_invalid_id_without_data_access() {
        let sut = ProductService::new(FakeProductRepo::with_products(vec![widget()]));

        let err = sut.get_by_id(0).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn add_rejects_negative_cost() {
        let sut = ProductService::new(FakeProductRepo::empty());
        let mut product = widget();
        product.prod_id = 0;
        product.cost = Decimal::new(-1, 0);

        let err = sut.add(product).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn add_assigns_store_id() {
        let sut = ProductService::new(FakeProductRepo::empty());
        let mut product = widget();
        product.prod_id = 0;

        let result = sut.add(product).await.unwrap();

        assert_eq!(result.prod_id, 1);
    }

    #[tokio::test]
    async fn delete_rejects_invalid_id_without_data_access() {
        let sut = ProductService::new(FakeProductRepo::with_products(vec![widget()]));

        let err = sut.delete_by_id(-2).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn repository_failures_surface_as_internal() {
        let sut = ProductService::new(FakeProductRepo::failing());

        let err = sut.get_all().await.unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }
}
