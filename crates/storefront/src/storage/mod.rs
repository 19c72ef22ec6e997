//! Durable key-value storage backends.
//!
//! The cart persists itself to a single named slot: one key mapping to the
//! JSON-encoded line sequence, read once at hydration and fully overwritten
//! on every mutation. [`KeyValueStore`] abstracts that slot so the same cart
//! code runs over a file per key on disk ([`FileStore`]) or an in-memory map
//! ([`MemoryStore`]) in tests.
//!
//! Concurrent writers to the same slot are not coordinated; the last write
//! wins. That matches the product behavior this library preserves.

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from durable slot access.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a slot failed for a reason other than absence.
    #[error("failed to read slot '{key}': {source}")]
    Read {
        /// Slot key.
        key: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing a slot failed.
    #[error("failed to write slot '{key}': {source}")]
    Write {
        /// Slot key.
        key: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// A named durable key-value slot.
///
/// Implementations must be safe to share across clones of the services that
/// hold them; all methods take `&self`.
pub trait KeyValueStore: Send + Sync {
    /// Read the slot contents, or `None` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the slot exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot contents in full.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the value cannot be stored.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the slot, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if an existing slot cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
