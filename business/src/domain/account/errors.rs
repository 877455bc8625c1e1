#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account.not_signed_in")]
    NotSignedIn,
    #[error("account.profile_not_found")]
    ProfileNotFound,
    #[error("backend.failure")]
    Backend(#[from] crate::domain::errors::BackendError),
}
