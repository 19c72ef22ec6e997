//! Application state shared across UI layers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::cart::CartStore;
use crate::services::notifications::Notifier;
use crate::storage::{FileStore, KeyValueStore};

/// Application state shared across all consumers.
///
/// Constructed once at application start and passed by handle; the struct
/// is cheaply cloneable via `Arc`. This is where the cart store and the
/// notification dispatcher get their process-lifetime homes.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartStore,
    notifier: Notifier,
}

impl AppState {
    /// Create application state backed by file storage under the configured
    /// state directory. The cart hydrates from its slot immediately.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.state_dir.clone()));
        Self::with_storage(config, storage)
    }

    /// Create application state over an explicit storage backend.
    ///
    /// Useful for tests ([`MemoryStore`]) and hosts with their own durable
    /// storage.
    ///
    /// [`MemoryStore`]: crate::storage::MemoryStore
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let cart = CartStore::new(storage, config.cart_key.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart,
                notifier: Notifier::new(),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a handle to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a handle to the notification dispatcher.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }
}
