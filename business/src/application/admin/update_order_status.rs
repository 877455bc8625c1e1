use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::admin::use_cases::update_order_status::UpdateOrderStatusUseCase;
use crate::domain::backend::DataBackend;
use crate::domain::errors::BackendError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderStatus;

pub struct UpdateOrderStatusUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, order_id: Uuid, status: OrderStatus) -> Result<(), OrderError> {
        self.backend
            .update_order_status(order_id, status)
            .await
            .map_err(|err| match err {
                BackendError::NotFound => OrderError::NotFound,
                other => OrderError::Backend(other),
            })?;

        self.logger
            .info(&format!("Order {order_id} moved to {status}"));
        Ok(())
    }
}
