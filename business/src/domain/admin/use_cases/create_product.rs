use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    /// Validates and persists a new product, then upserts the stored row
    /// into the catalog cache.
    async fn execute(&self, props: NewProductProps) -> Result<Product, ProductError>;
}
