// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Wire shapes for the campaign mind-map REST API.
//!
//! Every response body is wrapped in `{ "success": bool, "data": ..., "error": ... }`.
//! Ids travel as plain strings and are validated into typed ids at the
//! boundary; a malformed id in a payload is a decode error, not a panic.

use serde::{Deserialize, Serialize};

use crate::model::{
    EdgeId, FileId, IdError, MapEdge, MapFile, MapNode, MindMap, NodeId, Point,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub pos_x: f64,
    pub pos_y: f64,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDto {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MindmapDto {
    pub nodes: Vec<NodeDto>,
    pub edges: Vec<EdgeDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapFileDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNodeBody<'a> {
    pub title: &'a str,
    pub notes: Option<&'a str>,
    pub pos_x: f64,
    pub pos_y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeFieldsBody<'a> {
    pub title: &'a str,
    pub notes: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionBody {
    pub pos_x: f64,
    pub pos_y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewEdgeBody<'a> {
    pub source_node_id: &'a str,
    pub target_node_id: &'a str,
    pub label: Option<&'a str>,
}

impl NodeDto {
    pub fn into_model(self) -> Result<(NodeId, MapNode), IdError> {
        let node_id = NodeId::new(self.id)?;
        let files = self
            .files
            .into_iter()
            .map(FileId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let node = MapNode::new_with(
            self.title,
            self.notes,
            Point::new(self.pos_x, self.pos_y),
            files,
        );
        Ok((node_id, node))
    }
}

impl EdgeDto {
    pub fn into_model(self) -> Result<(EdgeId, MapEdge), IdError> {
        let edge_id = EdgeId::new(self.id)?;
        let edge = MapEdge::new_with(
            NodeId::new(self.source_node_id)?,
            NodeId::new(self.target_node_id)?,
            self.label,
        );
        Ok((edge_id, edge))
    }
}

impl MindmapDto {
    pub fn into_model(self) -> Result<MindMap, IdError> {
        let mut map = MindMap::default();
        for node in self.nodes {
            let (node_id, node) = node.into_model()?;
            map.nodes_mut().insert(node_id, node);
        }
        for edge in self.edges {
            let (edge_id, edge) = edge.into_model()?;
            map.edges_mut().insert(edge_id, edge);
        }
        Ok(map)
    }
}

impl MapFileDto {
    pub fn into_model(self) -> Result<MapFile, IdError> {
        Ok(MapFile::new(FileId::new(self.id)?, self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiEnvelope, MapFileDto, MindmapDto, NodeDto};

    #[test]
    fn envelope_decodes_error_shape() {
        let envelope: ApiEnvelope<MindmapDto> =
            serde_json::from_str(r#"{"success":false,"error":"campaign not found"}"#)
                .expect("decode");

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("campaign not found"));
    }

    #[test]
    fn mindmap_dto_converts_to_model() {
        let dto: MindmapDto = serde_json::from_str(
            r#"{
                "nodes": [
                    {"id":"n-1","title":"A","pos_x":10.0,"pos_y":20.0},
                    {"id":"n-2","title":"B","notes":"hidden","pos_x":0.0,"pos_y":0.0,"files":["f-1"]}
                ],
                "edges": [
                    {"id":"e-1","source_node_id":"n-1","target_node_id":"n-2","label":"road"}
                ]
            }"#,
        )
        .expect("decode");

        let map = dto.into_model().expect("convert");
        assert_eq!(map.nodes().len(), 2);
        assert_eq!(map.edges().len(), 1);

        let node = map.nodes().get("n-2").expect("node");
        assert_eq!(node.notes(), Some("hidden"));
        assert_eq!(node.files().len(), 1);
    }

    #[test]
    fn map_file_dto_converts_to_model() {
        let dto: MapFileDto =
            serde_json::from_str(r#"{"id":"f-3","name":"crypt-map.png"}"#).expect("decode");

        let file = dto.into_model().expect("convert");
        assert_eq!(file.file_id().as_str(), "f-3");
        assert_eq!(file.name(), "crypt-map.png");
    }

    #[test]
    fn map_file_dto_rejects_malformed_id() {
        let dto = MapFileDto {
            id: "files/3".to_owned(),
            name: "crypt-map.png".to_owned(),
        };

        assert!(dto.into_model().is_err());
    }

    #[test]
    fn malformed_id_is_a_conversion_error() {
        let dto = NodeDto {
            id: "nodes/7".to_owned(),
            title: "Bad".to_owned(),
            notes: None,
            pos_x: 0.0,
            pos_y: 0.0,
            files: Vec::new(),
        };

        assert!(dto.into_model().is_err());
    }
}
