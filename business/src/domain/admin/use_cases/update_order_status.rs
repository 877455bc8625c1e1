use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderStatus;

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, order_id: Uuid, status: OrderStatus) -> Result<(), OrderError>;
}
