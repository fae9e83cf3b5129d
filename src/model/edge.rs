// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

use super::ids::NodeId;

/// A labeled directed connection between two nodes.
///
/// Endpoints are referenced by id, not owned; deleting a node must
/// cascade-delete its incident edges (see the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEdge {
    source_node_id: NodeId,
    target_node_id: NodeId,
    label: Option<String>,
}

impl MapEdge {
    pub fn new(source_node_id: NodeId, target_node_id: NodeId) -> Self {
        Self {
            source_node_id,
            target_node_id,
            label: None,
        }
    }

    pub fn new_with(
        source_node_id: NodeId,
        target_node_id: NodeId,
        label: Option<String>,
    ) -> Self {
        Self {
            source_node_id,
            target_node_id,
            label,
        }
    }

    pub fn source_node_id(&self) -> &NodeId {
        &self.source_node_id
    }

    pub fn target_node_id(&self) -> &NodeId {
        &self.target_node_id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source_node_id == node_id || &self.target_node_id == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::MapEdge;
    use crate::model::NodeId;

    #[test]
    fn map_edge_can_be_constructed_and_updated() {
        let source = NodeId::new("n-1").expect("source id");
        let target = NodeId::new("n-2").expect("target id");
        let mut edge = MapEdge::new(source.clone(), target.clone());

        assert_eq!(edge.source_node_id(), &source);
        assert_eq!(edge.target_node_id(), &target);
        assert_eq!(edge.label(), None);

        edge.set_label(Some("leads to"));
        assert_eq!(edge.label(), Some("leads to"));

        edge.set_label::<&str>(None);
        assert_eq!(edge.label(), None);
    }

    #[test]
    fn touches_matches_either_endpoint() {
        let source = NodeId::new("n-1").expect("source id");
        let target = NodeId::new("n-2").expect("target id");
        let other = NodeId::new("n-3").expect("other id");
        let edge = MapEdge::new(source.clone(), target.clone());

        assert!(edge.touches(&source));
        assert!(edge.touches(&target));
        assert!(!edge.touches(&other));
    }
}
