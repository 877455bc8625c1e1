use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::backend::DataBackend;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::store::ProductsStore;
use crate::domain::catalog::use_cases::product_detail::GetProductDetailUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

pub struct GetProductDetailUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub store: Arc<ProductsStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(&self, id: Uuid) -> Result<Product, CatalogError> {
        if let Some(product) = self.store.get_product_by_id(id) {
            return Ok(product);
        }

        match self.backend.get_product(id).await {
            Ok(Some(product)) => {
                self.store.set_single_product(product.clone());
                Ok(product)
            }
            Ok(None) => {
                self.logger.warn(&format!("Product not found: {id}"));
                self.store.set_error("Product not found");
                Err(CatalogError::ProductNotFound)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Product fetch failed for {id}: {err}"));
                self.store.set_error("Failed to load product");
                Err(CatalogError::FetchFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::backend::MockDataBackend;
    use crate::domain::errors::BackendError;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: Uuid, name: &str) -> Product {
        Product::from_backend(
            id,
            name.to_string(),
            String::new(),
            10.0,
            5,
            String::new(),
            "Misc".to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_serve_cached_product_without_fetching() {
        let id = Uuid::new_v4();
        let mut backend = MockDataBackend::new();
        backend.expect_get_product().never();
        let store = Arc::new(ProductsStore::new(mock_logger()));
        store.set_products(vec![product(id, "Red Shoe")]);

        let use_case = GetProductDetailUseCaseImpl {
            backend: Arc::new(backend),
            store,
            logger: mock_logger(),
        };

        let result = use_case.execute(id).await.unwrap();

        assert_eq!(result.name, "Red Shoe");
    }

    #[tokio::test]
    async fn should_fetch_and_upsert_on_cache_miss() {
        let id = Uuid::new_v4();
        let mut backend = MockDataBackend::new();
        backend
            .expect_get_product()
            .times(1)
            .returning(move |id| Ok(Some(product(id, "Blue Hat"))));
        let store = Arc::new(ProductsStore::new(mock_logger()));
        store.set_products(vec![product(Uuid::new_v4(), "Red Shoe")]);
        let stamped = store.last_fetched();

        let use_case = GetProductDetailUseCaseImpl {
            backend: Arc::new(backend),
            store: store.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute(id).await.unwrap();

        assert_eq!(result.name, "Blue Hat");
        assert_eq!(store.products().len(), 2);
        // The detail fetch must not invalidate catalog freshness.
        assert_eq!(store.last_fetched(), stamped);
    }

    #[tokio::test]
    async fn should_treat_missing_product_as_error() {
        let mut backend = MockDataBackend::new();
        backend.expect_get_product().returning(|_| Ok(None));
        let store = Arc::new(ProductsStore::new(mock_logger()));

        let use_case = GetProductDetailUseCaseImpl {
            backend: Arc::new(backend),
            store: store.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), CatalogError::ProductNotFound));
        assert_eq!(store.error().as_deref(), Some("Product not found"));
    }

    #[tokio::test]
    async fn should_surface_backend_failure_as_store_error() {
        let mut backend = MockDataBackend::new();
        backend
            .expect_get_product()
            .returning(|_| Err(BackendError::Network));
        let store = Arc::new(ProductsStore::new(mock_logger()));

        let use_case = GetProductDetailUseCaseImpl {
            backend: Arc::new(backend),
            store: store.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), CatalogError::FetchFailed));
        assert_eq!(store.error().as_deref(), Some("Failed to load product"));
    }
}
