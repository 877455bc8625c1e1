use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::account::model::UserProfile;
use crate::domain::errors::BackendError;
use crate::domain::order::model::{Order, OrderStatus};
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// Authenticated-session view of a user, as reported by the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
}

/// Remote data source port: products, orders, profiles and authentication,
/// all hosted by a backend-as-a-service.
///
/// The stores never call this port. Application use cases fetch through it
/// and push results into the stores (`set_products` / `set_error` /
/// `set_single_product`), so state bookkeeping and I/O stay separate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataBackend: Send + Sync {
    /// Full catalog, ordered by creation time descending.
    async fn list_products(&self) -> Result<Vec<Product>, BackendError>;
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, BackendError>;
    /// Persists a new product; the backend assigns id and timestamps.
    async fn create_product(&self, product: &Product) -> Result<Product, BackendError>;
    async fn update_product(&self, product: &Product) -> Result<Product, BackendError>;
    async fn delete_product(&self, id: Uuid) -> Result<(), BackendError>;

    /// Persists a new order; the backend assigns id and timestamps.
    async fn create_order(&self, order: &Order) -> Result<Order, BackendError>;
    /// Orders, newest first, optionally narrowed to one user.
    async fn list_orders<'a>(&self, user_id: Option<&'a UserId>)
        -> Result<Vec<Order>, BackendError>;
    async fn update_order_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<(), BackendError>;

    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, BackendError>;
    async fn update_profile(&self, profile: &UserProfile) -> Result<(), BackendError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthUser, BackendError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, BackendError>;
    async fn sign_out(&self) -> Result<(), BackendError>;
    async fn current_user(&self) -> Result<Option<AuthUser>, BackendError>;
}
