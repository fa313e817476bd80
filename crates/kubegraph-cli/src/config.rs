//! Configuration loading.
//!
//! The configuration file is a JSON document mapping group/version/resource
//! triples to display ranks:
//!
//! ```json
//! {
//!   "resources": [
//!     {"group": "apps", "version": "v1", "resource": "deployments", "rank": 0},
//!     {"group": "", "version": "v1", "resource": "pods", "rank": 1}
//!   ]
//! }
//! ```
//!
//! Ranks may be omitted on every entry at once, in which case listing order
//! decides the layout (see `RankTable`).

use std::fs;

use serde::Deserialize;

use kubegraph_core::ResourceDescriptor;
use kubegraph_error::{Error, ErrorKind, Result};

/// One configured resource entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceEntry {
    /// API group; empty or omitted for the core group.
    #[serde(default)]
    pub group: String,
    pub version: String,
    /// Plural resource name, e.g. `pods`. Also keys the node icon.
    pub resource: String,
    #[serde(default)]
    pub rank: Option<i64>,
}

/// The configuration file contents.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub resources: Vec<ResourceEntry>,
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::ConfigInvalid, "failed to read configuration file")
                .with_operation("config::load")
                .with_context("path", path)
                .set_source(e)
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::new(ErrorKind::ConfigInvalid, "failed to parse configuration file")
                .with_operation("config::load")
                .with_context("path", path)
                .set_source(e)
        })
    }

    /// The ordered descriptor list handed to the graph engine.
    pub fn descriptors(&self) -> Vec<ResourceDescriptor> {
        self.resources
            .iter()
            .map(|entry| ResourceDescriptor {
                group: entry.group.clone(),
                version: entry.version.clone(),
                resource: entry.resource.clone(),
                rank: entry.rank,
            })
            .collect()
    }
}
