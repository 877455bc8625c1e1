use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use business::domain::account::model::{UserProfile, UserRole};
use business::domain::backend::{AuthUser, DataBackend};
use business::domain::errors::BackendError;
use business::domain::order::model::{Order, OrderStatus};
use business::domain::product::model::Product;
use business::domain::shared::value_objects::UserId;

struct Credential {
    user_id: UserId,
    password_digest: String,
}

#[derive(Default)]
struct BackendState {
    // Appended in creation order, so reverse iteration yields newest first.
    products: Vec<Product>,
    orders: Vec<Order>,
    profiles: HashMap<UserId, UserProfile>,
    credentials: HashMap<String, Credential>,
    session: Option<AuthUser>,
}

/// In-process stand-in for the hosted backend. Backs demos and tests with
/// the same port contract the remote service honours: ids and timestamps
/// are assigned on create, listings come back newest first, and auth keeps
/// a single current session.
#[derive(Default)]
pub struct InMemoryDataBackend {
    state: RwLock<BackendState>,
}

impl InMemoryDataBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn digest(password: &str) -> String {
        STANDARD.encode(Sha256::digest(password.as_bytes()))
    }
}

#[async_trait]
impl DataBackend for InMemoryDataBackend {
    async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.products.iter().rev().cloned().collect())
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, BackendError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.products.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn create_product(&self, product: &Product) -> Result<Product, BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        let mut stored = product.clone();
        stored.id = Some(Uuid::new_v4());
        stored.created_at = Some(now);
        stored.updated_at = Some(now);
        state.products.push(stored.clone());
        Ok(stored)
    }

    async fn update_product(&self, product: &Product) -> Result<Product, BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let id = product.id.ok_or(BackendError::not_found())?;
        let row = state
            .products
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or(BackendError::not_found())?;
        let mut stored = product.clone();
        stored.created_at = row.created_at;
        stored.updated_at = Some(Utc::now());
        *row = stored.clone();
        Ok(stored)
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let before = state.products.len();
        state.products.retain(|p| p.id != Some(id));
        if state.products.len() == before {
            return Err(BackendError::not_found());
        }
        Ok(())
    }

    async fn create_order(&self, order: &Order) -> Result<Order, BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        let mut stored = order.clone();
        stored.id = Some(Uuid::new_v4());
        stored.created_at = Some(now);
        stored.updated_at = Some(now);
        state.orders.push(stored.clone());
        Ok(stored)
    }

    async fn list_orders<'a>(
        &self,
        user_id: Option<&'a UserId>,
    ) -> Result<Vec<Order>, BackendError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .orders
            .iter()
            .rev()
            .filter(|order| match user_id {
                Some(uid) => order.user_id.as_ref() == Some(uid),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn update_order_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<(), BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == Some(order_id))
            .ok_or(BackendError::not_found())?;
        order.status = status;
        order.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, BackendError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.profiles.get(user_id).cloned())
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if !state.profiles.contains_key(&profile.id) {
            return Err(BackendError::not_found());
        }
        state.profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthUser, BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.credentials.contains_key(email) {
            return Err(BackendError::rejected());
        }

        let user_id = UserId::new(Uuid::new_v4().to_string());
        state.credentials.insert(
            email.to_string(),
            Credential {
                user_id: user_id.clone(),
                password_digest: Self::digest(password),
            },
        );
        state.profiles.insert(
            user_id.clone(),
            UserProfile {
                id: user_id.clone(),
                email: email.to_string(),
                full_name: Some(full_name.to_string()),
                phone: None,
                address: None,
                role: UserRole::Customer,
            },
        );

        let user = AuthUser {
            id: user_id,
            email: email.to_string(),
        };
        state.session = Some(user.clone());
        Ok(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let credential = state
            .credentials
            .get(email)
            .ok_or(BackendError::unauthorized())?;
        if credential.password_digest != Self::digest(password) {
            return Err(BackendError::unauthorized());
        }

        let user = AuthUser {
            id: credential.user_id.clone(),
            email: email.to_string(),
        };
        state.session = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.session = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, BackendError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::order::model::{NewOrderProps, OrderLine};
    use business::domain::product::model::NewProductProps;

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            description: "A product".to_string(),
            price: 20.0,
            stock: 5,
            image_url: String::new(),
            category: "Misc".to_string(),
        })
        .unwrap()
    }

    fn order(user_id: Option<UserId>) -> Order {
        Order::new(NewOrderProps {
            user_id,
            customer_info: None,
            lines: vec![OrderLine {
                product_id: Uuid::new_v4(),
                quantity: 1,
                price: 20.0,
            }],
            total_amount: 27.39,
            shipping_address: "1 Main St, Springfield, IL 62701".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_and_timestamps_on_create() {
        let backend = InMemoryDataBackend::new();

        let stored = backend.create_product(&product("Red Shoe")).await.unwrap();

        assert!(stored.id.is_some());
        assert!(stored.created_at.is_some());
        let fetched = backend.get_product(stored.id.unwrap()).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn should_list_products_newest_first() {
        let backend = InMemoryDataBackend::new();

        backend.create_product(&product("First")).await.unwrap();
        backend.create_product(&product("Second")).await.unwrap();

        let products = backend.list_products().await.unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Second", "First"]);
    }

    #[tokio::test]
    async fn should_update_existing_product_and_keep_created_at() {
        let backend = InMemoryDataBackend::new();
        let stored = backend.create_product(&product("Red Shoe")).await.unwrap();

        let mut changed = stored.clone();
        changed.price = 25.0;
        let updated = backend.update_product(&changed).await.unwrap();

        assert_eq!(updated.price, 25.0);
        assert_eq!(updated.created_at, stored.created_at);
    }

    #[tokio::test]
    async fn should_report_not_found_for_unknown_rows() {
        let backend = InMemoryDataBackend::new();

        let mut ghost = product("Ghost");
        ghost.id = Some(Uuid::new_v4());

        assert!(matches!(
            backend.update_product(&ghost).await.unwrap_err(),
            BackendError::NotFound
        ));
        assert!(matches!(
            backend.delete_product(Uuid::new_v4()).await.unwrap_err(),
            BackendError::NotFound
        ));
        assert!(matches!(
            backend
                .update_order_status(Uuid::new_v4(), OrderStatus::Shipped)
                .await
                .unwrap_err(),
            BackendError::NotFound
        ));
    }

    #[tokio::test]
    async fn should_filter_orders_by_user() {
        let backend = InMemoryDataBackend::new();
        let ada = UserId::new("ada");

        backend.create_order(&order(Some(ada.clone()))).await.unwrap();
        backend.create_order(&order(None)).await.unwrap();
        backend.create_order(&order(Some(ada.clone()))).await.unwrap();

        let all = backend.list_orders(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let mine = backend.list_orders(Some(&ada)).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|o| o.user_id.as_ref() == Some(&ada)));
    }

    #[tokio::test]
    async fn should_update_order_status() {
        let backend = InMemoryDataBackend::new();
        let stored = backend.create_order(&order(None)).await.unwrap();

        backend
            .update_order_status(stored.id.unwrap(), OrderStatus::Delivered)
            .await
            .unwrap();

        let orders = backend.list_orders(None).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn should_sign_up_and_open_a_session() {
        let backend = InMemoryDataBackend::new();

        let user = backend
            .sign_up("ada@example.com", "hunter2", "Ada Lovelace")
            .await
            .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(backend.current_user().await.unwrap(), Some(user.clone()));

        let profile = backend.get_profile(&user.id).await.unwrap().unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.role, UserRole::Customer);
    }

    #[tokio::test]
    async fn should_reject_duplicate_sign_up() {
        let backend = InMemoryDataBackend::new();
        backend
            .sign_up("ada@example.com", "hunter2", "Ada")
            .await
            .unwrap();

        let result = backend.sign_up("ada@example.com", "other", "Imposter").await;

        assert!(matches!(result.unwrap_err(), BackendError::Rejected));
    }

    #[tokio::test]
    async fn should_refuse_sign_in_with_wrong_password() {
        let backend = InMemoryDataBackend::new();
        backend
            .sign_up("ada@example.com", "hunter2", "Ada")
            .await
            .unwrap();
        backend.sign_out().await.unwrap();

        let result = backend.sign_in("ada@example.com", "wrong").await;

        assert!(matches!(result.unwrap_err(), BackendError::Unauthorized));
        assert_eq!(backend.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_sign_in_and_out() {
        let backend = InMemoryDataBackend::new();
        let signed_up = backend
            .sign_up("ada@example.com", "hunter2", "Ada")
            .await
            .unwrap();
        backend.sign_out().await.unwrap();
        assert_eq!(backend.current_user().await.unwrap(), None);

        let signed_in = backend
            .sign_in("ada@example.com", "hunter2")
            .await
            .unwrap();

        assert_eq!(signed_in, signed_up);
        assert_eq!(backend.current_user().await.unwrap(), Some(signed_in));
    }

    #[tokio::test]
    async fn should_update_only_existing_profiles() {
        let backend = InMemoryDataBackend::new();
        let user = backend
            .sign_up("ada@example.com", "hunter2", "Ada")
            .await
            .unwrap();

        let mut profile = backend.get_profile(&user.id).await.unwrap().unwrap();
        profile.phone = Some("555-0100".to_string());
        backend.update_profile(&profile).await.unwrap();
        let reloaded = backend.get_profile(&user.id).await.unwrap().unwrap();
        assert_eq!(reloaded.phone.as_deref(), Some("555-0100"));

        let ghost = UserProfile {
            id: UserId::new("ghost"),
            email: "ghost@example.com".to_string(),
            full_name: None,
            phone: None,
            address: None,
            role: UserRole::Customer,
        };
        assert!(matches!(
            backend.update_profile(&ghost).await.unwrap_err(),
            BackendError::NotFound
        ));
    }
}
