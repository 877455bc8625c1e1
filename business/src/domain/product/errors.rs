#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.not_found")]
    NotFound,
    #[error("backend.failure")]
    Backend(#[from] crate::domain::errors::BackendError),
}
