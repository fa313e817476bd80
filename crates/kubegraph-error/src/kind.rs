//! Error kinds for kubegraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors so callers can decide how to handle a
/// failure without inspecting message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration: no resources, malformed file, bad rank layout
    ConfigInvalid,

    /// Building the Kubernetes client failed (kubeconfig, TLS, auth)
    ClientFailed,

    /// Listing a configured resource from the cluster failed
    ListFailed,

    /// A listed object could not be converted to an object summary
    ConvertFailed,

    /// Writing the output artifact failed
    WriteFailed,
}

impl ErrorKind {
    /// Check if errors of this kind are typically retryable.
    ///
    /// A list call may fail transiently (API server hiccup, timeout), while
    /// a malformed configuration will never fix itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::ListFailed)
    }

    /// Get the kind as a static string
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::ConfigInvalid.to_string(), "ConfigInvalid");
        assert_eq!(ErrorKind::ListFailed.as_str(), "ListFailed");
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorKind::ListFailed.is_retryable());
        assert!(!ErrorKind::ConfigInvalid.is_retryable());
        assert!(!ErrorKind::WriteFailed.is_retryable());
    }
}
