use crate::domain::catalog::pagination::{self, PageItem};
use crate::domain::catalog::query::{self, CatalogQuery, SortKey};
use crate::domain::product::model::Product;

/// Default grid size of the storefront's catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One renderable page of the filtered catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Product>,
    /// The effective page after clamping the request into range.
    pub current_page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<PageItem>,
}

/// View state for the catalog page: search term, category, sort order and
/// requested page. Holds no products itself; [`Self::page_view`] derives a
/// page from whatever catalog snapshot the caller passes in, so the result
/// always reflects the current store state.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    query: CatalogQuery,
    requested_page: usize,
    page_size: usize,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogBrowser {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: CatalogQuery::default(),
            requested_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn requested_page(&self) -> usize {
        self.requested_page
    }

    // Query changes jump back to the first page.

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.requested_page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.query.category = category.into();
        self.requested_page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.requested_page = 1;
    }

    /// Requests a page; the request is clamped into range when the view is
    /// derived, so a shrunken result set can never strand the browser on a
    /// page that no longer exists.
    pub fn go_to_page(&mut self, page: usize) {
        self.requested_page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.requested_page += 1;
    }

    pub fn previous_page(&mut self) {
        self.requested_page = (self.requested_page - 1).max(1);
    }

    /// Filters, sorts and paginates the given catalog snapshot.
    pub fn page_view(&self, products: &[Product]) -> PageView {
        let filtered = query::filter_and_sort(products, &self.query);
        let total_pages = pagination::total_pages(filtered.len(), self.page_size);
        let current_page = pagination::clamp_page(self.requested_page, total_pages);
        let items = pagination::page_slice(&filtered, current_page, self.page_size).to_vec();

        PageView {
            items,
            current_page,
            total_pages,
            page_numbers: pagination::page_numbers(total_pages, current_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn product(name: &str, category: &str, price: f64) -> Product {
        Product {
            id: Some(Uuid::new_v4()),
            name: name.to_string(),
            description: String::new(),
            price,
            stock: 1,
            image_url: String::new(),
            category: category.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn many(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| product(&format!("Item {i:03}"), "C", i as f64))
            .collect()
    }

    #[test]
    fn should_paginate_and_clamp_requested_page() {
        let mut browser = CatalogBrowser::new(12);
        let products = many(25);

        browser.go_to_page(5);
        let view = browser.page_view(&products);

        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn should_reset_to_first_page_when_query_changes() {
        let mut browser = CatalogBrowser::new(5);
        browser.go_to_page(4);

        browser.set_search_term("Item");
        assert_eq!(browser.requested_page(), 1);

        browser.go_to_page(3);
        browser.set_category("C");
        assert_eq!(browser.requested_page(), 1);

        browser.go_to_page(2);
        browser.set_sort(SortKey::PriceHighToLow);
        assert_eq!(browser.requested_page(), 1);
    }

    #[test]
    fn should_render_single_empty_page_when_nothing_matches() {
        let mut browser = CatalogBrowser::new(12);
        browser.set_search_term("no such product");

        let view = browser.page_view(&many(25));

        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert!(view.items.is_empty());
        assert_eq!(view.page_numbers, vec![PageItem::Page(1)]);
    }

    #[test]
    fn should_step_pages_within_bounds() {
        let mut browser = CatalogBrowser::new(10);
        let products = many(25);

        browser.previous_page();
        assert_eq!(browser.page_view(&products).current_page, 1);

        browser.next_page();
        browser.next_page();
        assert_eq!(browser.page_view(&products).current_page, 3);

        browser.next_page();
        // Beyond the end: the derived view clamps back to the last page.
        assert_eq!(browser.page_view(&products).current_page, 3);
    }

    #[test]
    fn should_filter_before_paginating_against_full_catalog() {
        let mut browser = CatalogBrowser::new(2);
        let mut products = many(6);
        products.push(product("Special", "Other", 99.0));

        browser.set_category("Other");
        let view = browser.page_view(&products);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Special");
        assert_eq!(view.total_pages, 1);
    }
}
