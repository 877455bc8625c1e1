use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::use_cases::update_product::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::backend::DataBackend;
use crate::domain::catalog::store::ProductsStore;
use crate::domain::errors::BackendError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateProductUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub store: Arc<ProductsStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let existing = self
            .backend
            .get_product(params.id)
            .await
            .map_err(|err| match err {
                BackendError::NotFound => ProductError::NotFound,
                other => ProductError::Backend(other),
            })?
            .ok_or(ProductError::NotFound)?;

        let name = match params.name {
            Some(ref name) if name.trim().is_empty() => return Err(ProductError::NameEmpty),
            Some(name) => name,
            None => existing.name,
        };

        let price = params.price.unwrap_or(existing.price);
        if !price.is_finite() || price < 0.0 {
            return Err(ProductError::PriceInvalid);
        }

        let updated = Product {
            id: existing.id,
            name,
            description: params.description.unwrap_or(existing.description),
            price,
            stock: params.stock.unwrap_or(existing.stock),
            image_url: params.image_url.unwrap_or(existing.image_url),
            category: params.category.unwrap_or(existing.category),
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        };

        let stored = self.backend.update_product(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", stored.name));
        self.store.set_single_product(stored.clone());
        Ok(stored)
    }
}
