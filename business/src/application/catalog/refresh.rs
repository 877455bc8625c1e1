use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backend::DataBackend;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::store::ProductsStore;
use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

/// Fetch routine between the backend and the products store. The store
/// gates freshness; this use case does the I/O and pushes results in.
/// Overlapping calls are not fenced: the last writer wins.
pub struct RefreshCatalogUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub store: Arc<ProductsStore>,
    pub logger: Arc<dyn Logger>,
}

impl RefreshCatalogUseCaseImpl {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        self.store.set_loading(true);

        match self.backend.list_products().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Fetched {} catalog products", products.len()));
                self.store.set_products(products);
                self.store.set_loading(false);
                Ok(self.store.products())
            }
            Err(err) => {
                self.logger
                    .error(&format!("Catalog fetch failed: {err}"));
                // Terminal for this attempt: also forces loading off.
                self.store.set_error("Failed to load products");
                Err(CatalogError::FetchFailed)
            }
        }
    }
}

#[async_trait]
impl RefreshCatalogUseCase for RefreshCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        if !self.store.should_fetch_products() {
            self.logger.debug("Catalog cache is fresh, skipping fetch");
            return Ok(self.store.products());
        }

        self.fetch().await
    }

    async fn force_refresh(&self) -> Result<Vec<Product>, CatalogError> {
        self.store.reset();
        self.fetch().await
    }
}
