use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::domain::cart::model::{CART_STORAGE_KEY, CartLine, CartSnapshot};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::storage::KeyValueStore;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&CartSnapshot) + Send + Sync>;

struct CartState {
    lines: Vec<CartLine>,
    total: f64,
    item_count: u32,
    version: u64,
}

struct ListenerTable {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

/// Authoritative in-memory shopping cart.
///
/// Every mutation recomputes `total` and `item_count` from the line set,
/// bumps the snapshot version, persists the full line list to the
/// key-value store (best effort) and notifies subscribers synchronously,
/// all before the mutating call returns. Constructed explicitly and
/// injected where needed; there is no ambient global cart.
pub struct CartStore {
    state: RwLock<CartState>,
    listeners: RwLock<ListenerTable>,
    storage: Option<Arc<dyn KeyValueStore>>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Creates the store and hydrates it from the persisted blob, if any.
    /// A missing or unreadable blob yields an empty cart; hydration never
    /// fails.
    pub fn new(storage: Option<Arc<dyn KeyValueStore>>, logger: Arc<dyn Logger>) -> Self {
        let store = Self {
            state: RwLock::new(CartState {
                lines: Vec::new(),
                total: 0.0,
                item_count: 0,
                version: 0,
            }),
            listeners: RwLock::new(ListenerTable {
                next_id: 0,
                entries: Vec::new(),
            }),
            storage,
            logger,
        };
        store.hydrate();
        store
    }

    // Actions

    /// Adds `quantity` of `product`, merging into an existing line for the
    /// same product id. Precondition: the product must have a resolved id;
    /// an id-less product is logged and ignored.
    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        let Some(product_id) = product.id else {
            self.logger
                .warn("Ignoring cart add for a product without a resolved id");
            return;
        };

        self.commit(|lines| {
            if let Some(line) = lines
                .iter_mut()
                .find(|line| line.product.id == Some(product_id))
            {
                line.quantity = line.quantity.saturating_add(quantity);
            } else if quantity >= 1 {
                lines.push(CartLine {
                    product: product.clone(),
                    quantity,
                });
            }
        });
    }

    /// Removes the line for `product_id`; a no-op when absent.
    pub fn remove_from_cart(&self, product_id: Uuid) {
        self.commit(|lines| {
            lines.retain(|line| line.product.id != Some(product_id));
        });
    }

    /// Sets the quantity for `product_id` to an absolute value. A quantity
    /// of zero or less behaves exactly like [`Self::remove_from_cart`]; an
    /// unknown product id is a no-op.
    pub fn update_quantity(&self, product_id: Uuid, quantity: i32) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = quantity as u32;
        self.commit(|lines| {
            if let Some(line) = lines
                .iter_mut()
                .find(|line| line.product.id == Some(product_id))
            {
                line.quantity = quantity;
            }
        });
    }

    /// Empties the cart and persists the empty line list.
    pub fn clear_cart(&self) {
        self.commit(|lines| lines.clear());
    }

    // Reads

    pub fn items(&self) -> Vec<CartLine> {
        self.read_state().lines.clone()
    }

    pub fn total(&self) -> f64 {
        self.read_state().total
    }

    pub fn item_count(&self) -> u32 {
        self.read_state().item_count
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().lines.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.read_state().version
    }

    pub fn snapshot(&self) -> CartSnapshot {
        let state = self.read_state();
        CartSnapshot {
            lines: state.lines.clone(),
            total: state.total,
            item_count: state.item_count,
            version: state.version,
        }
    }

    pub fn is_product_in_cart(&self, product_id: Uuid) -> bool {
        self.read_state()
            .lines
            .iter()
            .any(|line| line.product.id == Some(product_id))
    }

    /// Quantity currently in the cart for `product_id`; 0 when absent.
    pub fn get_product_quantity(&self, product_id: Uuid) -> u32 {
        self.read_state()
            .lines
            .iter()
            .find(|line| line.product.id == Some(product_id))
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    // Live view

    /// Registers a subscriber that is invoked synchronously with the fresh
    /// snapshot after every mutation.
    pub fn subscribe(
        &self,
        listener: impl Fn(&CartSnapshot) + Send + Sync + 'static,
    ) -> ListenerId {
        let mut table = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.entries.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        let mut table = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        table.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    // Internals

    fn hydrate(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        let raw = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(err) => {
                self.logger
                    .warn(&format!("Could not read persisted cart: {err}"));
                return;
            }
        };

        let lines: Vec<CartLine> = match serde_json::from_str(&raw) {
            Ok(lines) => lines,
            Err(err) => {
                self.logger
                    .warn(&format!("Discarding unreadable persisted cart: {err}"));
                return;
            }
        };

        let normalized = normalize(lines.clone());
        let changed = normalized != lines;

        {
            let mut state = self.write_state();
            let (total, item_count) = reduce(&normalized);
            state.lines = normalized;
            state.total = total;
            state.item_count = item_count;
        }

        // Normalization counts as a mutation: write the cleaned list back.
        if changed {
            self.persist();
        }
    }

    fn commit(&self, apply: impl FnOnce(&mut Vec<CartLine>)) {
        let snapshot = {
            let mut state = self.write_state();
            apply(&mut state.lines);
            let (total, item_count) = reduce(&state.lines);
            state.total = total;
            state.item_count = item_count;
            state.version += 1;
            CartSnapshot {
                lines: state.lines.clone(),
                total: state.total,
                item_count: state.item_count,
                version: state.version,
            }
        };

        self.persist();
        self.notify(&snapshot);
    }

    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        let lines = self.read_state().lines.clone();
        match serde_json::to_string(&lines) {
            Ok(json) => {
                if let Err(err) = storage.set(CART_STORAGE_KEY, &json) {
                    self.logger
                        .warn(&format!("Could not persist cart: {err}"));
                }
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Could not serialize cart: {err}"));
            }
        }
    }

    fn notify(&self, snapshot: &CartSnapshot) {
        let table = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in &table.entries {
            listener(snapshot);
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CartState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CartState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reduce(lines: &[CartLine]) -> (f64, u32) {
    let total = lines.iter().map(CartLine::line_total).sum();
    let item_count = lines.iter().map(|line| line.quantity).sum();
    (total, item_count)
}

/// Cleans a hydrated line list: drops id-less products and zero quantities,
/// merges duplicate product ids into the earliest line.
fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut normalized: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        let Some(product_id) = line.product.id else {
            continue;
        };
        if line.quantity == 0 {
            continue;
        }
        if let Some(existing) = normalized
            .iter_mut()
            .find(|existing| existing.product.id == Some(product_id))
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            normalized.push(line);
        }
    }
    normalized
}
