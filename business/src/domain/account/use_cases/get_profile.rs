use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::UserProfile;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    /// Profile of the currently signed-in user.
    async fn execute(&self) -> Result<UserProfile, AccountError>;
}
