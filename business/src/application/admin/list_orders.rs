use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::use_cases::list_orders::ListOrdersUseCase;
use crate::domain::backend::DataBackend;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct ListOrdersUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListOrdersUseCase for ListOrdersUseCaseImpl {
    async fn execute(&self, user_id: Option<&UserId>) -> Result<Vec<Order>, OrderError> {
        let orders = self.backend.list_orders(user_id).await?;
        self.logger.info(&format!("Found {} orders", orders.len()));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    use super::*;
    use crate::domain::backend::MockDataBackend;
    use crate::domain::order::model::{OrderLine, OrderStatus};

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_pass_user_filter_through() {
        let mut backend = MockDataBackend::new();
        backend
            .expect_list_orders()
            .withf(|user| user.map(UserId::as_str) == Some("uid-1"))
            .returning(|user| {
                Ok(vec![Order::from_backend(
                    Uuid::new_v4(),
                    user.cloned(),
                    None,
                    vec![OrderLine {
                        product_id: Uuid::new_v4(),
                        quantity: 1,
                        price: 20.0,
                    }],
                    49.39,
                    OrderStatus::Pending,
                    "1 Main St".to_string(),
                    Utc::now(),
                    Utc::now(),
                )])
            });

        let use_case = ListOrdersUseCaseImpl {
            backend: Arc::new(backend),
            logger: mock_logger(),
        };

        let user = UserId::new("uid-1");
        let orders = use_case.execute(Some(&user)).await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].user_id, Some(user));
    }
}
