use async_trait::async_trait;

use crate::domain::checkout::form::CheckoutForm;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    /// Turns the current cart into a pending order: validates the form,
    /// prices the cart with the checkout policy, submits the order and
    /// clears the cart on success.
    async fn execute(&self, form: &CheckoutForm) -> Result<Order, OrderError>;
}
