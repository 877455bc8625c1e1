#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("backend.failure")]
    Backend(#[from] crate::domain::errors::BackendError),
}
