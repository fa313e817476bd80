//! Node registration and candidate connection tracking.

use kubegraph_error::{Error, ErrorKind, Result};

use crate::infer::connections_for;
use crate::key::NodeKey;
use crate::model::{Connection, GraphModel, Node};
use crate::object::ObjectSummary;
use crate::rank::RankedResource;

impl GraphModel {
    /// Register a visible node for every object in one kind's listing and
    /// track its candidate connections.
    ///
    /// Called once per configured kind, in any order. Connections may point
    /// at nodes populated by a later call - or never populated at all - so
    /// nothing is resolved here; existence is checked in
    /// [`GraphModel::connect`].
    pub fn populate(&mut self, objects: &[ObjectSummary], resource: &RankedResource) -> Result<()> {
        let subgraph = self.subgraphs.get_mut(&resource.rank).ok_or_else(|| {
            Error::new(ErrorKind::Unexpected, "resource rank missing from scaffold")
                .with_operation("model::populate")
                .with_context("resource", resource.descriptor.gvr())
                .with_context("rank", resource.rank.to_string())
        })?;

        for object in objects {
            let key = NodeKey::new(&object.kind, &object.name);
            subgraph.nodes.push(Node {
                key: key.clone(),
                label: object.name.clone(),
                icon: resource.descriptor.resource.clone(),
            });
            self.registered.insert(key.clone(), resource.rank);

            // Track the controlling owner so an edge can link owner to owned
            // later. The edge cannot be created now: the owner node may not
            // exist yet.
            if let Some(owner) = object.owners.first() {
                if owner.controller {
                    self.pending.push(Connection::new(
                        NodeKey::new(&owner.kind, &owner.name),
                        key,
                    ));
                }
            }

            for connection in connections_for(object) {
                self.pending.push(connection);
            }
        }

        tracing::debug!(
            resource = %resource.descriptor.gvr(),
            rank = resource.rank,
            objects = objects.len(),
            "populated listing"
        );
        Ok(())
    }
}
