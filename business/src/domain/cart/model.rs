use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;

/// Storage key for the persisted cart blob.
pub const CART_STORAGE_KEY: &str = "cart";

/// One cart entry: a product snapshot plus how many of it the shopper wants.
///
/// Invariant: `quantity >= 1`. A line whose quantity would reach zero is
/// removed from the cart, never stored as zero. The serde layout of this
/// type is exactly the persisted cart format: an ordered JSON array of
/// `{ "product": { .. }, "quantity": n }` objects with no version field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Complete cart state at one point in time. `total` and `item_count` are
/// always exact reductions of `lines`; they are recomputed on every
/// mutation and never adjusted independently.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub item_count: u32,
    /// Monotonic mutation counter; lets a subscriber tell snapshots apart.
    pub version: u64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
