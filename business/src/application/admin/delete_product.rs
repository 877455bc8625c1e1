use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::admin::use_cases::delete_product::DeleteProductUseCase;
use crate::domain::backend::DataBackend;
use crate::domain::catalog::store::ProductsStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;

pub struct DeleteProductUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub store: Arc<ProductsStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, id: Uuid) -> Result<(), ProductError> {
        self.backend.delete_product(id).await?;
        self.logger.info(&format!("Product deleted: {id}"));

        // The store has no single-row removal; drop the cache so the next
        // catalog read refetches without the deleted row.
        self.store.reset();
        Ok(())
    }
}
