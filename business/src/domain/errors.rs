/// Errors surfaced by the remote data backend port.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend.network")]
    Network,
    #[error("backend.not_found")]
    NotFound,
    #[error("backend.unauthorized")]
    Unauthorized,
    #[error("backend.rejected")]
    Rejected,
}

impl BackendError {
    pub fn network() -> Self {
        BackendError::Network
    }
    pub fn not_found() -> Self {
        BackendError::NotFound
    }
    pub fn unauthorized() -> Self {
        BackendError::Unauthorized
    }
    pub fn rejected() -> Self {
        BackendError::Rejected
    }
}

/// Errors surfaced by the key-value persistence port. The cart store only
/// ever logs these; a failed persist never escapes a mutating action.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.invalid_key")]
    InvalidKey,
    #[error("storage.io")]
    Io,
}
