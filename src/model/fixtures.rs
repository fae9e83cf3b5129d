// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

use super::edge::MapEdge;
use super::geometry::Point;
use super::ids::{EdgeId, NodeId};
use super::mindmap::MindMap;
use super::node::MapNode;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

/// A small campaign map used by the CLI demo mode and tests.
pub fn demo_mindmap() -> MindMap {
    let mut map = MindMap::default();

    let village = nid("n-village");
    let tavern = nid("n-tavern");
    let crypt = nid("n-crypt");
    let baron = nid("n-baron");

    let mut village_node = MapNode::new("Hollowbrook", Point::new(40.0, 40.0));
    village_node.set_notes(Some("starting settlement"));
    map.nodes_mut().insert(village.clone(), village_node);

    map.nodes_mut()
        .insert(tavern.clone(), MapNode::new("The Lame Raven", Point::new(280.0, 40.0)));

    let mut crypt_node = MapNode::new("Sunken Crypt", Point::new(280.0, 200.0));
    crypt_node.set_notes(Some("sealed since the flood"));
    map.nodes_mut().insert(crypt.clone(), crypt_node);

    map.nodes_mut()
        .insert(baron.clone(), MapNode::new("Baron Aldric", Point::new(40.0, 200.0)));

    map.edges_mut().insert(
        eid("e-village-tavern"),
        MapEdge::new_with(village.clone(), tavern.clone(), Some("a day's walk".to_owned())),
    );
    map.edges_mut().insert(
        eid("e-tavern-crypt"),
        MapEdge::new_with(tavern, crypt.clone(), Some("rumored entrance".to_owned())),
    );
    map.edges_mut()
        .insert(eid("e-baron-crypt"), MapEdge::new(baron, crypt));

    map
}
