//! Skeleton construction.
//!
//! The scaffold is composed of:
//!   - the root directed graph (edge direction reflects ownership),
//!   - one namespace subgraph styled as a non-rendering boundary,
//!   - one same-rank subgraph per distinct rank,
//!   - an invisible zero-size spine node in each rank subgraph,
//!   - invisible edges chaining the spines in rank order, plus one from the
//!     namespace node to the first spine, so the renderer lays ranks out top
//!     to bottom.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::key::NodeKey;
use crate::model::{GraphModel, Node, RankSubgraph};
use crate::rank::RankTable;

/// Icon key for the namespace node.
const NAMESPACE_ICON: &str = "namespaces";

/// Identifier of the same-rank subgraph for a rank.
pub(crate) fn rank_subgraph_name(rank: i64) -> String {
    format!("rank_{rank:04}")
}

/// Identifier of the invisible spine node for a rank.
pub(crate) fn spine_node_name(rank: i64) -> String {
    format!("spine_{rank:04}")
}

impl GraphModel {
    /// Build the skeleton for later population.
    ///
    /// Rank sets of length 0 or 1 have no spine chain to build; the scaffold
    /// still succeeds and registers whatever spine nodes exist.
    pub fn scaffold(title: &str, namespace: &str, ranks: &RankTable) -> Self {
        let mut subgraphs = BTreeMap::new();
        for &rank in ranks.ranks() {
            subgraphs.insert(
                rank,
                RankSubgraph {
                    rank,
                    name: rank_subgraph_name(rank),
                    spine: spine_node_name(rank),
                    nodes: Vec::new(),
                },
            );
        }

        // The final spine cannot source a chain edge; pair each rank with
        // its successor.
        let sorted = ranks.ranks();
        let spine_chain = sorted
            .windows(2)
            .map(|pair| (spine_node_name(pair[0]), spine_node_name(pair[1])))
            .collect();

        let namespace_key = NodeKey::new("namespace", namespace);
        let namespace_link = sorted
            .first()
            .map(|&first| (namespace_key.token(), spine_node_name(first)));

        tracing::debug!(namespace, ranks = sorted.len(), "scaffolded graph model");

        Self {
            title: title.to_string(),
            namespace: namespace.to_string(),
            namespace_node: Node {
                key: namespace_key,
                label: namespace.to_string(),
                icon: NAMESPACE_ICON.to_string(),
            },
            subgraphs,
            registered: HashMap::new(),
            spine_chain,
            namespace_link,
            pending: Vec::new(),
            edges: Vec::new(),
            resolved: HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::ResourceDescriptor;

    fn table(ranks: &[i64]) -> RankTable {
        let descriptors: Vec<ResourceDescriptor> = ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| ResourceDescriptor {
                group: String::new(),
                version: "v1".to_string(),
                resource: format!("resource-{i}"),
                rank: Some(rank),
            })
            .collect();
        RankTable::from_descriptors(&descriptors).unwrap()
    }

    #[test]
    fn test_spine_chain_shape() {
        let model = GraphModel::scaffold("Visualization", "n1", &table(&[0, 1, 2]));
        assert_eq!(model.subgraphs().count(), 3);
        assert_eq!(
            model.spine_chain(),
            &[
                ("spine_0000".to_string(), "spine_0001".to_string()),
                ("spine_0001".to_string(), "spine_0002".to_string()),
            ]
        );
        let link = model.namespace_link().unwrap();
        assert_eq!(link.0, "\"namespace_n1\"");
        assert_eq!(link.1, "spine_0000");
    }

    #[test]
    fn test_single_rank_has_no_chain() {
        let model = GraphModel::scaffold("Visualization", "n1", &table(&[5]));
        assert!(model.spine_chain().is_empty());
        let link = model.namespace_link().unwrap();
        assert_eq!(link.1, "spine_0005");
        let subgraph = model.subgraphs().next().unwrap();
        assert_eq!(subgraph.name, "rank_0005");
        assert_eq!(subgraph.spine, "spine_0005");
    }

    #[test]
    fn test_subgraphs_ordered_by_rank() {
        let model = GraphModel::scaffold("Visualization", "n1", &table(&[3, 1, 2]));
        let ranks: Vec<i64> = model.subgraphs().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }
}
