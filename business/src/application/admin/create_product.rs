use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::use_cases::create_product::CreateProductUseCase;
use crate::domain::backend::DataBackend;
use crate::domain::catalog::store::ProductsStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};

pub struct CreateProductUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub store: Arc<ProductsStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, props: NewProductProps) -> Result<Product, ProductError> {
        let product = Product::new(props)?;
        let created = self.backend.create_product(&product).await?;

        self.logger
            .info(&format!("Product created: {}", created.name));
        self.store.set_single_product(created.clone());
        Ok(created)
    }
}
