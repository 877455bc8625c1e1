use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::product::model::Product;

#[async_trait]
pub trait RefreshCatalogUseCase: Send + Sync {
    /// Fetches the catalog when the cache is empty or stale; otherwise
    /// returns the cached list without touching the backend.
    async fn execute(&self) -> Result<Vec<Product>, CatalogError>;

    /// Drops the cache and fetches unconditionally.
    async fn force_refresh(&self) -> Result<Vec<Product>, CatalogError>;
}
