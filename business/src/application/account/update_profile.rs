use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::UserProfile;
use crate::domain::account::use_cases::update_profile::UpdateProfileUseCase;
use crate::domain::backend::DataBackend;
use crate::domain::logger::Logger;

pub struct UpdateProfileUseCaseImpl {
    pub backend: Arc<dyn DataBackend>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, profile: &UserProfile) -> Result<(), AccountError> {
        self.backend.update_profile(profile).await?;
        self.logger
            .info(&format!("Profile updated for {}", profile.id));
        Ok(())
    }
}
