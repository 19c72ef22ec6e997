//! Identifier types for cart lines and toasts.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque product identifier.
///
/// Product catalogs in the wild carry either numeric or string identifiers,
/// and cart lines must compare equal against whichever form the catalog
/// uses. The untagged serde representation round-trips both forms without
/// loss: `1` stays a number, `"sku-1"` stays a string.
///
/// ## Examples
///
/// ```
/// use pomelo_core::ProductId;
///
/// let numeric = ProductId::from(42);
/// let textual = ProductId::from("sku-42");
/// assert_ne!(numeric, textual);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric identifier.
    Int(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self::Int(i64::from(id))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// A unique toast identifier.
///
/// Minted from the creation timestamp in unix milliseconds plus a
/// per-dispatcher sequence number, so two toasts created within the same
/// millisecond remain distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    /// Mint a toast ID from a timestamp and sequence number.
    #[must_use]
    pub fn mint(unix_millis: i64, seq: u64) -> Self {
        Self(format!("{unix_millis}-{seq}"))
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
