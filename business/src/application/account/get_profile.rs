use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::UserProfile;
use crate::domain::account::use_cases::get_profile::GetProfileUseCase;
use crate::domain::backend::DataBackend;
use crate::domain::logger::Logger;

pub struct GetProfileUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self) -> Result<UserProfile, AccountError> {
        let user = self
            .backend
            .current_user()
            .await?
            .ok_or(AccountError::NotSignedIn)?;

        self.backend
            .get_profile(&user.id)
            .await?
            .ok_or(AccountError::ProfileNotFound)
    }
}
