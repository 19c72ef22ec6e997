//! The toast entity.

use serde::{Deserialize, Serialize};

use super::id::ToastId;
use super::severity::Severity;

/// A transient user-facing message.
///
/// Toasts live in the notification dispatcher's visible sequence from the
/// instant they are created until they are removed, either explicitly or by
/// an expiry timer scheduled at creation. The timeout itself is not part of
/// the entity; once a toast is visible, only its identity matters for
/// removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique identifier, used for explicit and timed removal.
    pub id: ToastId,
    /// Display severity.
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Display text.
    pub message: String,
}
