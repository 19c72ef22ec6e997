//! Toast severities and their default auto-dismiss durations.

use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

/// Severity of a user-facing toast notification.
///
/// Each severity carries a default auto-dismiss duration: errors linger
/// longest so the user can read them, successes clear fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral informational message.
    #[default]
    Info,
    /// A completed operation or positive outcome.
    Success,
    /// A failure the user should act on.
    Error,
    /// A non-critical issue worth surfacing.
    Warn,
}

impl Severity {
    /// Default duration a toast of this severity stays visible.
    #[must_use]
    pub const fn default_timeout(self) -> Duration {
        match self {
            Self::Info => Duration::from_millis(4000),
            Self::Success => Duration::from_millis(3500),
            Self::Error => Duration::from_millis(6000),
            Self::Warn => Duration::from_millis(5000),
        }
    }

    /// Lowercase label, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warn => "warn",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        assert_eq!(Severity::Success.default_timeout(), Duration::from_millis(3500));
        assert_eq!(Severity::Error.default_timeout(), Duration::from_millis(6000));
        assert_eq!(Severity::Warn.default_timeout(), Duration::from_millis(5000));
        assert_eq!(Severity::Info.default_timeout(), Duration::from_millis(4000));
    }

    #[test]
    fn test_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Severity::Warn).expect("serializes"),
            "\"warn\""
        );
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
