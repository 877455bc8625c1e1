use chrono::{DateTime, Utc};

use crate::domain::product::model::Product;

/// Catalog sort orders offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive name, ascending. The default.
    #[default]
    Name,
    PriceLowToHigh,
    PriceHighToLow,
    /// Creation time, newest first; a missing timestamp sorts as the epoch.
    Newest,
}

impl SortKey {
    /// Maps the storefront's sort-select values; anything unknown falls
    /// back to the name sort.
    pub fn from_key(key: &str) -> Self {
        match key {
            "price-low" => SortKey::PriceLowToHigh,
            "price-high" => SortKey::PriceHighToLow,
            "newest" => SortKey::Newest,
            _ => SortKey::Name,
        }
    }
}

/// Search term, category filter and sort order for one catalog view.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name, description and
    /// category. Empty means "match everything".
    pub search_term: String,
    /// Exact category match; empty means "all categories".
    pub category: String,
    pub sort: SortKey,
}

/// Derives the filtered, sorted product sequence for a catalog view.
///
/// Always runs search, then category filter, then sort, against the full
/// catalog snapshot — never against a previously filtered result.
pub fn filter_and_sort(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let search = query.search_term.to_lowercase();

    let mut matched: Vec<Product> = products
        .iter()
        .filter(|product| {
            search.is_empty()
                || product.name.to_lowercase().contains(&search)
                || product.description.to_lowercase().contains(&search)
                || product.category.to_lowercase().contains(&search)
        })
        .filter(|product| query.category.is_empty() || product.category == query.category)
        .cloned()
        .collect();

    match query.sort {
        SortKey::Name => {
            matched.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceLowToHigh => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHighToLow => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Newest => {
            matched.sort_by_key(|product| {
                std::cmp::Reverse(product.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
            });
        }
    }

    matched
}
