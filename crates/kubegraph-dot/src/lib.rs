//! DOT rendering for the kubegraph graph model.
//!
//! This crate serializes a finished [`GraphModel`] into Graphviz DOT text.
//! Output is deterministic: the same model always produces byte-identical
//! text (rank subgraphs ascending, nodes and edges in insertion order, fixed
//! attribute spelling and quoting).
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and the [`DotBuilder`]

mod dot;

pub use dot::DotBuilder;

use kubegraph_core::model::{GraphModel, Node};

/// Newlines prepended to a node label. Graphviz centres labels on the node;
/// the padding pushes the name below the icon instead of through it.
const LABEL_OFFSET: usize = 9;

/// Options for graph rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory the node icon images are resolved against.
    pub assets_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            assets_base: "assets".to_string(),
        }
    }
}

impl RenderOptions {
    fn image_path(&self, icon: &str) -> String {
        let base = self.assets_base.trim_end_matches('/');
        format!("{base}/{icon}.png")
    }
}

fn offset_label(name: &str) -> String {
    let mut label = "\n".repeat(LABEL_OFFSET);
    label.push_str(name);
    label
}

fn write_object_node(builder: &mut DotBuilder, node: &Node, options: &RenderOptions) {
    let label = offset_label(&node.label);
    let image = options.image_path(&node.icon);
    builder.node(
        &node.key.token(),
        &[
            ("penwidth", "0"),
            ("label", label.as_str()),
            ("image", image.as_str()),
        ],
    );
}

/// Render the graph model to DOT format.
pub fn render_graph(model: &GraphModel, options: &RenderOptions) -> String {
    let mut builder = DotBuilder::new(model.title());
    builder.attr("rankdir", "TB");

    // The namespace boundary: a dotted subgraph holding a zero-size node
    // carrying the namespace icon, then one invisible same-rank subgraph per
    // rank with its spine node and the visible object nodes.
    let namespace_token = model.namespace_node().key.token();
    let namespace_label = offset_label(model.namespace());
    let namespace_image = options.image_path(&model.namespace_node().icon);
    builder.start_subgraph(&namespace_token);
    builder.attr("style", "dotted");
    builder.node(
        &namespace_token,
        &[
            ("penwidth", "0"),
            ("height", "0"),
            ("width", "0"),
            ("margin", "0"),
            ("label", namespace_label.as_str()),
            ("image", namespace_image.as_str()),
        ],
    );

    for subgraph in model.subgraphs() {
        builder.start_subgraph(&subgraph.name);
        builder.attr("rank", "same");
        builder.attr("style", "invis");
        builder.node(
            &subgraph.spine,
            &[
                ("style", "invis"),
                ("height", "0"),
                ("width", "0"),
                ("margin", "0"),
            ],
        );
        for node in &subgraph.nodes {
            write_object_node(&mut builder, node, options);
        }
        builder.end_subgraph();
    }
    builder.end_subgraph();

    // Invisible ordering edges: the spine chain, then namespace to first
    // spine.
    for (from, to) in model.spine_chain() {
        builder.edge(from, to, &[("style", "invis")]);
    }
    if let Some((from, to)) = model.namespace_link() {
        builder.edge(from, to, &[("style", "invis")]);
    }

    // Resolved relationship edges, dashed, label quoted verbatim.
    for edge in model.edges() {
        let source = edge.source.token();
        let destination = edge.destination.token();
        match &edge.label {
            Some(label) => builder.edge(
                &source,
                &destination,
                &[("style", "dashed"), ("label", label.as_str())],
            ),
            None => builder.edge(&source, &destination, &[("style", "dashed")]),
        };
    }

    let output = builder.build();
    tracing::debug!(bytes = output.len(), "rendered graph model");
    output
}
