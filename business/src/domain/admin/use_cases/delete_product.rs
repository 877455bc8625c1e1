use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Deletes the product remotely and drops the catalog cache so the next
    /// read refetches.
    async fn execute(&self, id: Uuid) -> Result<(), ProductError>;
}
