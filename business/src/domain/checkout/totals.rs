/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
/// Flat shipping fee below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: f64 = 5.99;
/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.085;

/// Checkout money breakdown. Derived from the subtotal alone and recomputed
/// on every read; never persisted or cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutTotals {
    pub subtotal: f64,
    pub shipping_cost: f64,
    pub tax: f64,
    pub grand_total: f64,
}

impl CheckoutTotals {
    pub fn from_subtotal(subtotal: f64) -> Self {
        let shipping_cost = if subtotal >= FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING_FEE
        };
        let tax = subtotal * TAX_RATE;

        Self {
            subtotal,
            shipping_cost,
            tax,
            grand_total: subtotal + shipping_cost + tax,
        }
    }
}
