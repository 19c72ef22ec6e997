//! Persisted shopping cart service.
//!
//! The cart owns an ordered sequence of line items, unique by product id.
//! Adding an already-carted product merges into the existing line's
//! quantity; the product fields captured at first add are deliberately not
//! refreshed. Every mutation re-serializes the full sequence to the durable
//! slot synchronously before returning, so a reload hydrates exactly what
//! the last successful mutation left behind.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use pomelo_core::{CartLine, Product, ProductId, QuantityInput};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Persisted shopping cart.
///
/// Cheaply clonable handle over shared state. UI layers read [`items`] and
/// [`total_price`] on demand or watch [`subscribe`] for change snapshots,
/// and invoke the mutating operations on user actions.
///
/// [`items`]: Self::items
/// [`total_price`]: Self::total_price
/// [`subscribe`]: Self::subscribe
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartInner>,
}

struct CartInner {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    items: Mutex<Vec<CartLine>>,
    snapshots: watch::Sender<Vec<CartLine>>,
}

impl CartStore {
    /// Create a cart over the given durable slot, hydrating from it.
    ///
    /// A missing slot, unreadable slot, or unparseable contents all fall
    /// open to an empty cart; hydration never fails.
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = hydrate(storage.as_ref(), &key);
        info!(slot = %key, lines = items.len(), "cart hydrated");

        let (snapshots, _) = watch::channel(items.clone());
        Self {
            inner: Arc::new(CartInner {
                storage,
                key,
                items: Mutex::new(items),
                snapshots,
            }),
        }
    }

    /// Add a product to the cart.
    ///
    /// The quantity is coerced to a positive integer (unparseable or
    /// non-positive input becomes 1). If a line for the product already
    /// exists its quantity increases in place and the originally captured
    /// fields are kept; otherwise a new line is appended at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails. The in-memory
    /// mutation has already been applied at that point, but subscribers are
    /// not notified.
    pub fn add_to_cart(&self, product: &Product, qty: impl Into<QuantityInput>) -> Result<()> {
        let add = qty.into().coerce();
        let mut items = self.lock_items();

        if let Some(line) = items.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(add);
            debug!(id = %product.id, quantity = line.quantity, "cart line merged");
        } else {
            items.push(CartLine::capture(product, add));
            debug!(id = %product.id, quantity = add, "cart line added");
        }

        self.persist(&items)?;
        self.publish(&items);
        Ok(())
    }

    /// Remove the line with the given product id. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails.
    pub fn remove_item(&self, id: &ProductId) -> Result<()> {
        let mut items = self.lock_items();
        items.retain(|line| line.id != *id);
        debug!(%id, remaining = items.len(), "cart line removed");

        self.persist(&items)?;
        self.publish(&items);
        Ok(())
    }

    /// Empty the cart entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the empty cart fails.
    pub fn clear_cart(&self) -> Result<()> {
        let mut items = self.lock_items();
        items.clear();
        debug!("cart cleared");

        self.persist(&items)?;
        self.publish(&items);
        Ok(())
    }

    /// Serialize the current sequence to the durable slot.
    ///
    /// Every mutation calls this before returning; consumers should not
    /// need it in normal operation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the slot write fails.
    pub fn save_cart(&self) -> Result<()> {
        let items = self.lock_items();
        self.persist(&items)
    }

    /// Snapshot of the current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartLine> {
        self.lock_items().clone()
    }

    /// Sum of price × quantity over all lines, recomputed on demand.
    ///
    /// A line whose captured `price` field is missing or non-numeric
    /// contributes `NaN`, which propagates into the total.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.lock_items().iter().map(CartLine::line_total).sum()
    }

    /// Watch the cart for change snapshots.
    ///
    /// The receiver's current value is the latest published snapshot; each
    /// successfully persisted mutation publishes a new one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartLine>> {
        self.inner.snapshots.subscribe()
    }

    fn lock_items(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        self.inner
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, items: &[CartLine]) -> Result<()> {
        let serialized = serde_json::to_string(items)?;
        self.inner.storage.write(&self.inner.key, &serialized)?;
        Ok(())
    }

    fn publish(&self, items: &[CartLine]) {
        // send_replace never fails even with no subscribers.
        self.inner.snapshots.send_replace(items.to_vec());
    }
}

/// Read and parse the slot, falling open to empty on any failure.
fn hydrate(storage: &dyn KeyValueStore, key: &str) -> Vec<CartLine> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            warn!(slot = %key, %error, "cart slot unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(error) => {
            warn!(slot = %key, %error, "cart slot unparseable, starting empty");
            Vec::new()
        }
    }
}
