//! Transient toast notification service.
//!
//! The dispatcher owns an ordered sequence of visible toasts. `notify`
//! appends one and, when an auto-dismiss timeout applies, spawns a timer
//! that removes it later; removal is keyed by toast id and idempotent, so a
//! timer firing after an early explicit removal is a harmless no-op. There
//! is no persistence; the sequence resets with the process.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};

use pomelo_core::{Severity, Toast, ToastId};

/// Options for [`Notifier::notify`].
///
/// Constructed via [`Notification::new`], which fills the severity's
/// default auto-dismiss timeout (success 3.5s, error 6s, warn 5s, info 4s).
/// `Default` is an info toast with an empty message.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use pomelo_core::Severity;
/// use pomelo_storefront::services::Notification;
///
/// // Error toast that stays until explicitly removed.
/// let sticky = Notification::new(Severity::Error, "payment failed").sticky();
///
/// // Success toast with a custom timeout.
/// let quick = Notification::new(Severity::Success, "saved")
///     .with_timeout(Duration::from_secs(1));
/// # let _ = (sticky, quick);
/// ```
#[derive(Debug, Clone)]
pub struct Notification {
    /// Display severity.
    pub severity: Severity,
    /// Display text.
    pub message: String,
    /// Auto-dismiss delay. `None` or zero means the toast persists until
    /// explicitly removed.
    pub timeout: Option<Duration>,
}

impl Notification {
    /// Create options with the severity's default timeout.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            timeout: Some(severity.default_timeout()),
        }
    }

    /// Override the auto-dismiss timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable auto-dismiss; the toast stays until explicitly removed.
    #[must_use]
    pub const fn sticky(mut self) -> Self {
        self.timeout = None;
        self
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(Severity::Info, "")
    }
}

/// Toast notification dispatcher.
///
/// One instance is constructed at application start and lives for the
/// process lifetime; consumers hold clones of the handle. UI layers watch
/// [`subscribe`] for snapshots of the visible sequence (insertion order is
/// display order) and call [`remove`] when the user dismisses a toast.
///
/// [`subscribe`]: Self::subscribe
/// [`remove`]: Self::remove
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

struct NotifierInner {
    toasts: Mutex<Vec<Toast>>,
    seq: AtomicU64,
    snapshots: watch::Sender<Vec<Toast>>,
}

impl Notifier {
    /// Create a dispatcher with an empty toast sequence.
    #[must_use]
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(NotifierInner {
                toasts: Mutex::new(Vec::new()),
                seq: AtomicU64::new(1),
                snapshots,
            }),
        }
    }

    /// Show a toast and return its id for early removal.
    ///
    /// The id combines the creation timestamp with a sequence counter that
    /// never resets, so toasts created within the same millisecond stay
    /// distinct. When the effective timeout is a positive duration, a timer
    /// is spawned onto the ambient tokio runtime to remove the toast after
    /// it elapses, measured from this call; overlapping timers are not
    /// aligned or corrected.
    ///
    /// Outside a tokio runtime no timer can be scheduled; the toast is
    /// shown anyway and stays until explicitly removed, with a warning
    /// logged.
    pub fn notify(&self, options: Notification) -> ToastId {
        let seq = self.inner.seq.fetch_add(1, Ordering::Relaxed);
        let id = ToastId::mint(Utc::now().timestamp_millis(), seq);

        let toast = Toast {
            id: id.clone(),
            severity: options.severity,
            message: options.message,
        };
        debug!(%id, severity = %toast.severity, "toast created");

        {
            let mut toasts = self.lock_toasts();
            toasts.push(toast);
            self.inner.snapshots.send_replace(toasts.clone());
        }

        if let Some(timeout) = options.timeout.filter(|t| !t.is_zero()) {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let notifier = self.clone();
                    let expired = id.clone();
                    handle.spawn(async move {
                        tokio::time::sleep(timeout).await;
                        notifier.remove(&expired);
                    });
                }
                Err(_) => {
                    warn!(%id, "no tokio runtime, toast will not auto-dismiss");
                }
            }
        }

        id
    }

    /// Remove a toast from the visible sequence.
    ///
    /// No-op if the id is not present; calling twice is safe. Expiry timers
    /// rely on this idempotence instead of being cancelled.
    pub fn remove(&self, id: &ToastId) {
        let mut toasts = self.lock_toasts();
        let before = toasts.len();
        toasts.retain(|toast| toast.id != *id);

        if toasts.len() < before {
            debug!(%id, "toast removed");
            self.inner.snapshots.send_replace(toasts.clone());
        }
    }

    /// Show a success toast (auto-dismisses after 3.5s).
    ///
    /// To override the timeout, call [`notify`] with
    /// [`Notification::new`]`(Severity::Success, ..)` plus
    /// [`with_timeout`] or [`sticky`].
    ///
    /// [`notify`]: Self::notify
    /// [`with_timeout`]: Notification::with_timeout
    /// [`sticky`]: Notification::sticky
    pub fn notify_success(&self, message: impl Into<String>) -> ToastId {
        self.notify(Notification::new(Severity::Success, message))
    }

    /// Show an error toast (auto-dismisses after 6s).
    ///
    /// Timeout overrides go through [`notify`](Self::notify) with an
    /// explicit [`Notification`].
    pub fn notify_error(&self, message: impl Into<String>) -> ToastId {
        self.notify(Notification::new(Severity::Error, message))
    }

    /// Show a warning toast (auto-dismisses after 5s).
    ///
    /// Timeout overrides go through [`notify`](Self::notify) with an
    /// explicit [`Notification`].
    pub fn notify_warn(&self, message: impl Into<String>) -> ToastId {
        self.notify(Notification::new(Severity::Warn, message))
    }

    /// Show an info toast (auto-dismisses after 4s).
    ///
    /// Timeout overrides go through [`notify`](Self::notify) with an
    /// explicit [`Notification`].
    pub fn notify_info(&self, message: impl Into<String>) -> ToastId {
        self.notify(Notification::new(Severity::Info, message))
    }

    /// Snapshot of the visible toasts, in display order.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock_toasts().clone()
    }

    /// Watch the visible sequence for change snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.snapshots.subscribe()
    }

    fn lock_toasts(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.inner
            .toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
