// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Local graph state for one campaign's mind map.
//!
//! All mutations are synchronous in-memory updates; persistence and
//! reconciliation with the server live in the editor layer. The only
//! validation beyond id lookups is referential: edges must reference two
//! distinct existing nodes, and removing a node cascades to its incident
//! edges.

use std::fmt;

use crate::model::{EdgeId, MapEdge, MapNode, MindMap, NodeId, Point};

/// Partial update for a node's editable fields. `None` leaves a field as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePatch {
    pub title: Option<String>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    map: MindMap,
}

impl GraphStore {
    pub fn new(map: MindMap) -> Self {
        Self { map }
    }

    pub fn mindmap(&self) -> &MindMap {
        &self.map
    }

    /// Replaces the whole graph, e.g. after a (re)load from the server.
    pub fn replace(&mut self, map: MindMap) {
        self.map = map;
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.map.nodes().contains_key(node_id)
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&MapNode> {
        self.map.nodes().get(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&MapEdge> {
        self.map.edges().get(edge_id)
    }

    pub fn add_node(&mut self, node_id: NodeId, node: MapNode) -> Result<(), StoreError> {
        if self.map.nodes().contains_key(&node_id) {
            return Err(StoreError::NodeAlreadyExists { node_id });
        }
        self.map.nodes_mut().insert(node_id, node);
        Ok(())
    }

    pub fn update_node(&mut self, node_id: &NodeId, patch: NodePatch) -> Result<(), StoreError> {
        let node = self
            .map
            .nodes_mut()
            .get_mut(node_id)
            .ok_or_else(|| StoreError::NodeNotFound { node_id: node_id.clone() })?;

        if let Some(title) = patch.title {
            node.set_title(title);
        }
        if let Some(notes) = patch.notes {
            node.set_notes(notes);
        }
        Ok(())
    }

    pub fn move_node(&mut self, node_id: &NodeId, pos: Point) -> Result<(), StoreError> {
        let node = self
            .map
            .nodes_mut()
            .get_mut(node_id)
            .ok_or_else(|| StoreError::NodeNotFound { node_id: node_id.clone() })?;
        node.set_pos(pos);
        Ok(())
    }

    /// Removes a node and every edge referencing it; returns the ids of the
    /// cascade-removed edges in id order.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Result<Vec<EdgeId>, StoreError> {
        if self.map.nodes_mut().remove(node_id).is_none() {
            return Err(StoreError::NodeNotFound { node_id: node_id.clone() });
        }

        let incident = self.map.edges_incident_to(node_id);
        for edge_id in &incident {
            self.map.edges_mut().remove(edge_id);
        }
        Ok(incident)
    }

    pub fn add_edge(&mut self, edge_id: EdgeId, edge: MapEdge) -> Result<(), StoreError> {
        if self.map.edges().contains_key(&edge_id) {
            return Err(StoreError::EdgeAlreadyExists { edge_id });
        }
        if edge.source_node_id() == edge.target_node_id() {
            return Err(StoreError::SelfEdge { node_id: edge.source_node_id().clone() });
        }
        for endpoint in [edge.source_node_id(), edge.target_node_id()] {
            if !self.map.nodes().contains_key(endpoint) {
                return Err(StoreError::MissingEndpoint { node_id: endpoint.clone() });
            }
        }
        self.map.edges_mut().insert(edge_id, edge);
        Ok(())
    }

    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> Result<(), StoreError> {
        if self.map.edges_mut().remove(edge_id).is_none() {
            return Err(StoreError::EdgeNotFound { edge_id: edge_id.clone() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NodeNotFound { node_id: NodeId },
    EdgeNotFound { edge_id: EdgeId },
    NodeAlreadyExists { node_id: NodeId },
    EdgeAlreadyExists { edge_id: EdgeId },
    MissingEndpoint { node_id: NodeId },
    SelfEdge { node_id: NodeId },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound { node_id } => write!(f, "node not found (id={node_id})"),
            Self::EdgeNotFound { edge_id } => write!(f, "edge not found (id={edge_id})"),
            Self::NodeAlreadyExists { node_id } => {
                write!(f, "node already exists (id={node_id})")
            }
            Self::EdgeAlreadyExists { edge_id } => {
                write!(f, "edge already exists (id={edge_id})")
            }
            Self::MissingEndpoint { node_id } => {
                write!(f, "edge endpoint is not in the map (id={node_id})")
            }
            Self::SelfEdge { node_id } => {
                write!(f, "edge source and target are the same node (id={node_id})")
            }
        }
    }
}

impl std::error::Error for StoreError {}
