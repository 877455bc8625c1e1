use async_trait::async_trait;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::model::DashboardStats;

#[async_trait]
pub trait DashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, AdminError>;
}
