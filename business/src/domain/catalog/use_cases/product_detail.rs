use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::product::model::Product;

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    /// Resolves one product for a detail view: cached copy when available,
    /// otherwise a single-row backend fetch that is upserted into the store
    /// without invalidating catalog freshness.
    async fn execute(&self, id: Uuid) -> Result<Product, CatalogError>;
}
