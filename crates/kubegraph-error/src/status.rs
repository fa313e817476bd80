//! Error status for retry decisions

use std::fmt;

/// The status of an error, indicating whether it can be retried.
///
/// kubegraph itself never retries (each run is a fresh snapshot), but the
/// status tells wrapping automation whether re-running the tool is worth it:
/// - `Permanent`: Don't retry, the error won't resolve without external changes
/// - `Temporary`: Can retry, the error might resolve on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    /// Error is permanent - don't retry without external changes.
    ///
    /// Examples: ConfigInvalid, ConvertFailed
    #[default]
    Permanent,

    /// Error is temporary - retry may succeed.
    ///
    /// Examples: ListFailed on an API server timeout
    Temporary,
}

impl ErrorStatus {
    /// Check if retry is recommended
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorStatus::Temporary)
    }

    /// Get status as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
