use crate::domain::product::model::Product;

/// How many rows the dashboard's top-products list shows.
pub const TOP_PRODUCT_COUNT: usize = 5;

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Sum of all order totals.
    pub total_sales: f64,
    /// Orders still pending fulfillment.
    pub active_orders: usize,
    pub total_products: usize,
    pub top_selling_products: Vec<Product>,
}
