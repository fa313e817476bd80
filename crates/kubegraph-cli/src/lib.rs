//! kubegraph command-line interface.
//!
//! Wires the external collaborators around the graph engine: configuration
//! loading, cluster access, summary conversion and the visualize pipeline.

pub mod client;
pub mod config;
pub mod pipeline;
pub mod summary;

pub use pipeline::run;

/// Options for running kubegraph.
pub struct KubegraphOptions {
    /// Path to the configuration file mapping resources to ranks.
    pub config: String,
    /// Namespace to visualize.
    pub namespace: String,
    /// Path of the output DOT file.
    pub output: String,
    /// Directory the node icon images are resolved against.
    pub assets: String,
    /// Label selector applied to every listing; empty selects everything.
    pub label_selector: String,
    /// Explicit kubeconfig path; `None` uses in-cluster then local config.
    pub kubeconfig: Option<String>,
    /// Title of the rendered graph.
    pub title: String,
    /// Print to stdout instead of writing the output file.
    pub stdout: bool,
}
