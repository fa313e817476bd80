//! The owned graph model.
//!
//! Created once per run by [`GraphModel::scaffold`], mutated only during the
//! populate and connect phases, then read by the renderer. All bookkeeping -
//! including the candidate-connection list that earlier designs kept in a
//! process-wide map - is instance state, so independent runs never observe
//! each other.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::key::NodeKey;

/// A visible node: identity, display label and icon reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub key: NodeKey,
    /// Display name; the renderer pushes it below the icon.
    pub label: String,
    /// Plural resource name keying the icon image, e.g. `pods`.
    pub icon: String,
}

/// One same-rank subgraph with its invisible spine node.
#[derive(Debug, Clone)]
pub struct RankSubgraph {
    pub rank: i64,
    /// Subgraph identifier, `rank_0000`.
    pub name: String,
    /// Invisible spine node identifier, `spine_0000`.
    pub spine: String,
    /// Visible nodes in insertion order.
    pub nodes: Vec<Node>,
}

/// A candidate connection proposed during population.
///
/// The destination may name an object that is never registered; existence is
/// only checked at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: NodeKey,
    pub destination: NodeKey,
    pub label: Option<String>,
}

impl Connection {
    pub fn new(source: NodeKey, destination: NodeKey) -> Self {
        Self {
            source,
            destination,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !label.is_empty() {
            self.label = Some(label);
        }
        self
    }
}

/// A resolved, renderable edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeKey,
    pub destination: NodeKey,
    pub label: Option<String>,
}

/// The graph model: namespace boundary, rank subgraphs, visible nodes,
/// ordering spine, candidate connections and resolved edges.
#[derive(Debug, Clone)]
pub struct GraphModel {
    pub(crate) title: String,
    pub(crate) namespace: String,
    pub(crate) namespace_node: Node,
    /// Rank subgraphs, ascending by rank.
    pub(crate) subgraphs: BTreeMap<i64, RankSubgraph>,
    /// Registered visible nodes and the rank they were inserted at.
    pub(crate) registered: HashMap<NodeKey, i64>,
    /// Invisible spine-chain edges, `(from, to)` spine identifiers.
    pub(crate) spine_chain: Vec<(String, String)>,
    /// Invisible edge from the namespace node token to the first spine.
    pub(crate) namespace_link: Option<(String, String)>,
    /// Candidate connections awaiting resolution, in insertion order.
    pub(crate) pending: Vec<Connection>,
    /// Resolved edges, in resolution order.
    pub(crate) edges: Vec<Edge>,
    /// Ordered pairs already resolved; also makes `connect` idempotent.
    pub(crate) resolved: HashSet<(NodeKey, NodeKey)>,
}

impl GraphModel {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The zero-size node representing the namespace boundary.
    pub fn namespace_node(&self) -> &Node {
        &self.namespace_node
    }

    /// Rank subgraphs in ascending rank order.
    pub fn subgraphs(&self) -> impl Iterator<Item = &RankSubgraph> {
        self.subgraphs.values()
    }

    /// Invisible edges chaining the spine nodes in rank order.
    pub fn spine_chain(&self) -> &[(String, String)] {
        &self.spine_chain
    }

    /// Invisible edge from the namespace node to the first spine, if any
    /// rank exists.
    pub fn namespace_link(&self) -> Option<&(String, String)> {
        self.namespace_link.as_ref()
    }

    /// Resolved edges in resolution order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether a visible node was registered under this key.
    pub fn has_node(&self, key: &NodeKey) -> bool {
        self.registered.contains_key(key)
    }

    /// The rank a visible node was registered at.
    pub fn node_rank(&self, key: &NodeKey) -> Option<i64> {
        self.registered.get(key).copied()
    }

    pub fn node_count(&self) -> usize {
        self.registered.len()
    }

    /// Candidate connections tracked so far.
    pub fn pending_connections(&self) -> &[Connection] {
        &self.pending
    }

    pub(crate) fn push_connection(&mut self, connection: Connection) {
        self.pending.push(connection);
    }
}
