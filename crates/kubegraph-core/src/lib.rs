//! Graph construction engine for kubegraph.
//!
//! This crate turns per-kind listings of Kubernetes object summaries into a
//! single hierarchical graph model: ranked subgraphs, deduplicated nodes and
//! inferred relationship edges, ready to hand to a renderer.
//!
//! # Module Structure
//!
//! - [`object`]: Read-only object summaries consumed from the cluster lister
//! - [`key`]: Canonical node identity ([`NodeKey`])
//! - [`rank`]: Ranked resource descriptors and rank derivation ([`RankTable`])
//! - [`model`]: The owned graph model ([`GraphModel`], nodes, edges)
//! - [`scaffold`]: Skeleton construction (namespace boundary, rank spine)
//! - [`populate`]: Node registration plus candidate connection tracking
//! - [`infer`]: Per-kind relationship inference rules
//! - [`resolve`]: Final edge resolution (existence check, dedup)
//!
//! The model is built in three serialized phases - scaffold, populate (once
//! per configured kind, in any order), connect - and is then read-only for
//! rendering. Cluster access, configuration parsing and DOT emission live in
//! the sibling crates.

pub mod infer;
pub mod key;
pub mod model;
pub mod object;
pub mod rank;

mod populate;
mod resolve;
mod scaffold;

pub use infer::connections_for;
pub use key::NodeKey;
pub use model::{Connection, Edge, GraphModel, Node, RankSubgraph};
pub use object::{
    EndpointSubset, HttpPath, HttpRule, ObjectDetail, ObjectRef, ObjectSummary, OwnerRef, PortSpec,
    VolumeSource,
};
pub use rank::{RankTable, RankedResource, ResourceDescriptor};

pub use kubegraph_error::{Error, ErrorKind, ErrorStatus, Result};
