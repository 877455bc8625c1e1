use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    /// Orders newest first, optionally narrowed to one user.
    async fn execute(&self, user_id: Option<&UserId>) -> Result<Vec<Order>, OrderError>;
}
