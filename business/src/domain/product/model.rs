use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

/// Catalog product. `id` and the timestamps are assigned by the backend and
/// stay absent until the row has been persisted remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image_url: String,
    /// May be empty; an empty category means "uncategorized".
    pub category: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub image_url: String,
    pub category: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if !props.price.is_finite() || props.price < 0.0 {
            return Err(ProductError::PriceInvalid);
        }

        Ok(Self {
            id: None,
            name: props.name,
            description: props.description,
            price: props.price,
            stock: props.stock,
            image_url: props.image_url,
            category: props.category,
            created_at: None,
            updated_at: None,
        })
    }

    /// Constructor for rows already persisted by the backend (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_backend(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        stock: u32,
        image_url: String,
        category: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            description,
            price,
            stock,
            image_url,
            category,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}
