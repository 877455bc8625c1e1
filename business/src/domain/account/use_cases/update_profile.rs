use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::UserProfile;

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, profile: &UserProfile) -> Result<(), AccountError>;
}
