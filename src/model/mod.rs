// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Model types for the campaign mind map.
//!
//! Nodes and edges live in a [`MindMap`]; positions are float pairs in an
//! unbounded canvas space. Server-minted ids are phantom-typed so node, edge,
//! campaign and file ids cannot be mixed up.

mod edge;
pub mod fixtures;
mod geometry;
mod ids;
mod mindmap;
mod node;

pub use edge::MapEdge;
pub use geometry::Point;
pub use ids::{CampaignId, EdgeId, FileId, Id, IdError, NodeId};
pub use mindmap::MindMap;
pub use node::{MapFile, MapNode};
