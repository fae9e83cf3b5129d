// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use super::edge::MapEdge;
use super::ids::{EdgeId, NodeId};
use super::node::MapNode;

/// The in-memory graph for one campaign's mind map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MindMap {
    nodes: BTreeMap<NodeId, MapNode>,
    edges: BTreeMap<EdgeId, MapEdge>,
}

impl MindMap {
    pub fn nodes(&self) -> &BTreeMap<NodeId, MapNode> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, MapNode> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, MapEdge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeId, MapEdge> {
        &mut self.edges
    }

    /// Ids of all edges whose source or target is `node_id`, in id order.
    pub fn edges_incident_to(&self, node_id: &NodeId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, edge)| edge.touches(node_id))
            .map(|(edge_id, _)| edge_id.clone())
            .collect()
    }
}
