use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::OrderError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        };
        write!(f, "{label}")
    }
}

/// One priced line of an order, frozen at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub quantity: u32,
    /// Unit price at the moment the order was placed.
    pub price: f64,
}

/// Contact details for guest checkouts, where no profile exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// A placed order. `id` and the timestamps are assigned by the backend;
/// `user_id` is absent for guest orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<Uuid>,
    pub user_id: Option<UserId>,
    pub customer_info: Option<CustomerInfo>,
    pub lines: Vec<OrderLine>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub shipping_address: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub struct NewOrderProps {
    pub user_id: Option<UserId>,
    pub customer_info: Option<CustomerInfo>,
    pub lines: Vec<OrderLine>,
    pub total_amount: f64,
    pub shipping_address: String,
}

impl Order {
    pub fn new(props: NewOrderProps) -> Result<Self, OrderError> {
        if props.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        if props.shipping_address.trim().is_empty() {
            return Err(OrderError::InvalidForm);
        }

        Ok(Self {
            id: None,
            user_id: props.user_id,
            customer_info: props.customer_info,
            lines: props.lines,
            total_amount: props.total_amount,
            status: OrderStatus::Pending,
            shipping_address: props.shipping_address,
            created_at: None,
            updated_at: None,
        })
    }

    /// Constructor for rows already persisted by the backend (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_backend(
        id: Uuid,
        user_id: Option<UserId>,
        customer_info: Option<CustomerInfo>,
        lines: Vec<OrderLine>,
        total_amount: f64,
        status: OrderStatus,
        shipping_address: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            customer_info,
            lines,
            total_amount,
            status,
            shipping_address,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> OrderLine {
        OrderLine {
            product_id: Uuid::new_v4(),
            quantity: 2,
            price: 20.0,
        }
    }

    #[test]
    fn should_start_pending_with_no_backend_fields() {
        let order = Order::new(NewOrderProps {
            user_id: None,
            customer_info: None,
            lines: vec![line()],
            total_amount: 49.39,
            shipping_address: "1 Main St, Springfield, IL 62701".to_string(),
        })
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.id.is_none());
        assert!(order.user_id.is_none());
    }

    #[test]
    fn should_reject_order_without_lines() {
        let result = Order::new(NewOrderProps {
            user_id: None,
            customer_info: None,
            lines: vec![],
            total_amount: 0.0,
            shipping_address: "1 Main St".to_string(),
        });

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[test]
    fn should_reject_blank_shipping_address() {
        let result = Order::new(NewOrderProps {
            user_id: None,
            customer_info: None,
            lines: vec![line()],
            total_amount: 49.39,
            shipping_address: "  ".to_string(),
        });

        assert!(matches!(result.unwrap_err(), OrderError::InvalidForm));
    }

    #[test]
    fn should_serialize_status_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(OrderStatus::Delivered.to_string(), "delivered");
    }
}
