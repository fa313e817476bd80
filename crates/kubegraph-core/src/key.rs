//! Canonical node identity.
//!
//! Node identity used to be an ad hoc `"Kind_name"` format string repeated at
//! every call site. It is now a dedicated type: equality and hashing are over
//! the `(kind, name)` pair itself, so two distinct objects can never collide,
//! and the rendered token is produced by exactly one canonicalization
//! function.

use std::fmt;

/// Canonical identity of a graph node: a `(kind, name)` pair.
///
/// Ordering and hashing use the pair, which makes identity injective by
/// construction. [`NodeKey::token`] renders the stable DOT identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    kind: String,
    name: String,
}

impl NodeKey {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The quoted identifier token used in rendered output, `"Kind_name"`.
    ///
    /// Kubernetes kinds are CamelCase and never contain `_`, so the first
    /// underscore unambiguously separates kind from name even inside the
    /// flattened token. Embedded quotes and backslashes are escaped so the
    /// token stays a single well-formed quoted identifier.
    pub fn token(&self) -> String {
        let raw = format!("{}_{}", self.kind, self.name);
        format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}
