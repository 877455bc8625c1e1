use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

/// How long a fetched catalog stays fresh before callers should refetch.
pub const STALENESS_WINDOW_SECS: i64 = 5 * 60;

/// How many products the storefront shows in the featured strip.
pub const FEATURED_PRODUCT_COUNT: usize = 8;

/// Handle returned by [`ProductsStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&CatalogSnapshot) + Send + Sync>;

/// Complete catalog state at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    /// Products in fetch order, unique by id. Ordering is whatever the
    /// fetch delivered (the backend lists newest first).
    pub products: Vec<Product>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub has_data: bool,
    /// Stamped only by a successful full fetch; staleness is judged solely
    /// from this field.
    pub last_fetched: Option<DateTime<Utc>>,
    pub version: u64,
}

struct ListenerTable {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

/// In-memory product catalog cache with a time-based staleness policy.
///
/// Pure state bookkeeping: the store never performs network I/O and never
/// returns errors. A fetch routine in the application layer pulls from the
/// backend and pushes results in through `set_products` / `set_error` /
/// `set_single_product`. While a fetch is in flight readers keep seeing the
/// last-known-good snapshot.
pub struct ProductsStore {
    state: RwLock<CatalogSnapshot>,
    listeners: RwLock<ListenerTable>,
    logger: Arc<dyn Logger>,
}

impl ProductsStore {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            state: RwLock::new(empty_snapshot()),
            listeners: RwLock::new(ListenerTable {
                next_id: 0,
                entries: Vec::new(),
            }),
            logger,
        }
    }

    // Actions

    /// Flags a fetch cycle. Entering a fetch (`loading = true`) clears any
    /// stale error; leaving one (`loading = false`) leaves the error alone.
    pub fn set_loading(&self, loading: bool) {
        self.mutate(|state| {
            state.is_loading = loading;
            if loading {
                state.error = None;
            }
        });
    }

    /// Adopts a full fetch result: replaces the catalog, clears any error
    /// and stamps the freshness timestamp.
    pub fn set_products(&self, products: Vec<Product>) {
        self.mutate(|state| {
            state.has_data = !products.is_empty();
            state.products = dedupe_by_id(products);
            state.error = None;
            state.last_fetched = Some(Utc::now());
        });
    }

    /// Records a failed fetch. Terminal for that fetch attempt: loading is
    /// forced off and the catalog is flagged as having no usable data.
    pub fn set_error(&self, message: impl Into<String>) {
        self.mutate(|state| {
            state.error = Some(message.into());
            state.has_data = false;
            state.is_loading = false;
        });
    }

    pub fn clear_error(&self) {
        self.mutate(|state| {
            state.error = None;
        });
    }

    /// Upserts one product by id, for detail-view fetches. Deliberately
    /// leaves `last_fetched` and `has_data` untouched so a single-row fetch
    /// never changes the "catalog is fresh" judgment.
    pub fn set_single_product(&self, product: Product) {
        let Some(product_id) = product.id else {
            self.logger
                .warn("Ignoring catalog upsert for a product without a resolved id");
            return;
        };

        self.mutate(|state| {
            if let Some(existing) = state
                .products
                .iter_mut()
                .find(|existing| existing.id == Some(product_id))
            {
                *existing = product;
            } else {
                state.products.push(product);
            }
        });
    }

    /// Returns to the empty initial state.
    pub fn reset(&self) {
        self.mutate(|state| {
            let version = state.version;
            *state = empty_snapshot();
            state.version = version;
        });
    }

    // Reads

    pub fn products(&self) -> Vec<Product> {
        self.read_state().products.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    pub fn has_data(&self) -> bool {
        self.read_state().has_data
    }

    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.read_state().last_fetched
    }

    pub fn version(&self) -> u64 {
        self.read_state().version
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.read_state().clone()
    }

    /// Pure lookup; `None` when the id is unknown.
    pub fn get_product_by_id(&self, id: Uuid) -> Option<Product> {
        self.read_state()
            .products
            .iter()
            .find(|product| product.id == Some(id))
            .cloned()
    }

    /// Sorted distinct non-empty category names across the catalog.
    pub fn categories(&self) -> Vec<String> {
        let state = self.read_state();
        let set: BTreeSet<&str> = state
            .products
            .iter()
            .map(|product| product.category.as_str())
            .filter(|category| !category.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// First eight products in fetch order.
    pub fn featured_products(&self) -> Vec<Product> {
        self.read_state()
            .products
            .iter()
            .take(FEATURED_PRODUCT_COUNT)
            .cloned()
            .collect()
    }

    /// The sole gate a caller must consult before issuing a remote fetch:
    /// true when the catalog is empty, never fetched, or older than the
    /// staleness window.
    pub fn should_fetch_products(&self) -> bool {
        self.should_fetch_products_at(Utc::now())
    }

    /// Same judgment against a supplied clock, for callers (and tests) that
    /// simulate time.
    pub fn should_fetch_products_at(&self, now: DateTime<Utc>) -> bool {
        let state = self.read_state();
        if state.products.is_empty() {
            return true;
        }
        match state.last_fetched {
            None => true,
            Some(fetched_at) => now - fetched_at > Duration::seconds(STALENESS_WINDOW_SECS),
        }
    }

    // Live view

    /// Registers a subscriber that is invoked synchronously with the fresh
    /// snapshot after every mutation.
    pub fn subscribe(
        &self,
        listener: impl Fn(&CatalogSnapshot) + Send + Sync + 'static,
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

    fn mutate(&self, apply: impl FnOnce(&mut CatalogSnapshot)) {
        let snapshot = {
            let mut state = self.write_state();
            apply(&mut state);
            state.version += 1;
            state.clone()
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &CatalogSnapshot) {
        let table = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in &table.entries {
            listener(snapshot);
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CatalogSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CatalogSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn empty_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        products: Vec::new(),
        is_loading: false,
        error: None,
        has_data: false,
        last_fetched: None,
        version: 0,
    }
}

/// Keeps the first occurrence of each product id; drops id-less rows.
fn dedupe_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut seen = BTreeSet::new();
    products
        .into_iter()
        .filter(|product| match product.id {
            Some(id) => seen.insert(id),
            None => false,
        })
        .collect()
}
