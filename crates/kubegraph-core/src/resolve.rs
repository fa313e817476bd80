//! Final edge resolution.

use crate::model::{Edge, GraphModel};

impl GraphModel {
    /// Resolve every tracked candidate connection into the final edge set.
    ///
    /// Runs after all kinds have been populated. A candidate whose source was
    /// never registered is dropped silently - the source may belong to a kind
    /// outside the configured set, or to another namespace. At most one edge
    /// is emitted per ordered (source, destination) pair, no matter how many
    /// rules proposed it. Destinations are *not* required to exist: an edge
    /// toward an unregistered destination renders as a dangling pointer, on
    /// purpose, so out-of-scope dependencies stay visible.
    ///
    /// The dedup set persists on the model, so calling this again is a no-op.
    pub fn connect(&mut self) {
        let mut dropped = 0usize;
        for connection in &self.pending {
            if !self.registered.contains_key(&connection.source) {
                dropped += 1;
                continue;
            }
            let pair = (connection.source.clone(), connection.destination.clone());
            if !self.resolved.insert(pair) {
                continue;
            }
            self.edges.push(Edge {
                source: connection.source.clone(),
                destination: connection.destination.clone(),
                label: connection.label.clone(),
            });
        }
        tracing::debug!(
            edges = self.edges.len(),
            dropped,
            "resolved candidate connections"
        );
    }
}
