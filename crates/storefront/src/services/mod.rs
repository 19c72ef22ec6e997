//! Stateful services consumed by UI layers.
//!
//! # Services
//!
//! - `cart` - Persisted shopping cart (quantity merging, durable slot)
//! - `notifications` - Transient toast queue (timed auto-expiry)

pub mod cart;
pub mod notifications;

pub use cart::CartStore;
pub use notifications::{Notification, Notifier};
