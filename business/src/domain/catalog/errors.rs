#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.fetch_failed")]
    FetchFailed,
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("backend.failure")]
    Backend(#[from] crate::domain::errors::BackendError),
}
