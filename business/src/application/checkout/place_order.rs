use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backend::DataBackend;
use crate::domain::cart::store::CartStore;
use crate::domain::checkout::form::CheckoutForm;
use crate::domain::checkout::totals::CheckoutTotals;
use crate::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{CustomerInfo, NewOrderProps, Order, OrderLine};

pub struct PlaceOrderUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, form: &CheckoutForm) -> Result<Order, OrderError> {
        if !form.is_valid() {
            return Err(OrderError::InvalidForm);
        }

        let snapshot = self.cart.snapshot();
        if snapshot.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let totals = CheckoutTotals::from_subtotal(snapshot.total);
        // Guest checkout is allowed; a signed-in user gets the order on
        // their account.
        let user = self.backend.current_user().await?;

        let lines: Vec<OrderLine> = snapshot
            .lines
            .iter()
            .filter_map(|line| {
                line.product.id.map(|product_id| OrderLine {
                    product_id,
                    quantity: line.quantity,
                    price: line.product.price,
                })
            })
            .collect();

        let order = Order::new(NewOrderProps {
            user_id: user.map(|user| user.id),
            customer_info: Some(CustomerInfo {
                full_name: form.full_name.clone(),
                email: form.email.clone(),
                phone: form.phone.clone(),
            }),
            lines,
            total_amount: totals.grand_total,
            shipping_address: form.shipping_address(),
        })?;

        let created = self.backend.create_order(&order).await?;

        self.cart.clear_cart();
        self.logger.info(&format!(
            "Order placed for {:.2} ({} lines)",
            created.total_amount,
            created.lines.len()
        ));
        Ok(created)
    }
}
