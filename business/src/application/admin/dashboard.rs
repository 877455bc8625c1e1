use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::model::{DashboardStats, TOP_PRODUCT_COUNT};
use crate::domain::admin::use_cases::dashboard::DashboardStatsUseCase;
use crate::domain::backend::DataBackend;
use crate::domain::logger::Logger;
use crate::domain::order::model::OrderStatus;

pub struct DashboardStatsUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DashboardStatsUseCase for DashboardStatsUseCaseImpl {
    async fn execute(&self) -> Result<DashboardStats, AdminError> {
        self.logger.info("Computing dashboard stats");
        let orders = self.backend.list_orders(None).await?;
        let products = self.backend.list_products().await?;

        let total_sales = orders.iter().map(|order| order.total_amount).sum();
        let active_orders = orders
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count();
        let total_products = products.len();
        let top_selling_products = products.into_iter().take(TOP_PRODUCT_COUNT).collect();

        Ok(DashboardStats {
            total_sales,
            active_orders,
            total_products,
            top_selling_products,
        })
    }
}
