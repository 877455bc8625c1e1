#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.invalid_form")]
    InvalidForm,
    #[error("order.not_found")]
    NotFound,
    #[error("backend.failure")]
    Backend(#[from] crate::domain::errors::BackendError),
}
