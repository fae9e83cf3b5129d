// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Scene derivation and SVG output for a mind map.
//!
//! Derivation is pure: it reads the graph and produces boxes and lines, and
//! is rerun from scratch whenever the graph changes. Node dimensions are
//! fixed constants rather than measured; line endpoints anchor at the
//! approximate visual center of each box. An edge whose endpoint node is
//! missing (deleted but not yet pruned) simply produces no line.

use std::fmt::Write as _;

use crate::model::{EdgeId, MindMap, NodeId, Point};

/// Assumed node box extent in canvas units.
pub const NODE_WIDTH: f64 = 160.0;
pub const NODE_HEIGHT: f64 = 48.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub boxes: Vec<NodeBox>,
    pub lines: Vec<EdgeLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub node_id: NodeId,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub edge_id: EdgeId,
    pub from: Point,
    pub to: Point,
    pub midpoint: Point,
    pub label: Option<String>,
}

/// Center anchor for a node box whose top-left corner is `origin`.
fn anchor(origin: Point) -> Point {
    origin + Point::new(NODE_WIDTH / 2.0, NODE_HEIGHT / 2.0)
}

pub fn derive_scene(map: &MindMap) -> Scene {
    let mut scene = Scene::default();

    for (node_id, node) in map.nodes() {
        scene.boxes.push(NodeBox {
            node_id: node_id.clone(),
            origin: node.pos(),
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
            title: node.title().to_owned(),
        });
    }

    for (edge_id, edge) in map.edges() {
        let Some(source) = map.nodes().get(edge.source_node_id()) else {
            continue;
        };
        let Some(target) = map.nodes().get(edge.target_node_id()) else {
            continue;
        };

        let from = anchor(source.pos());
        let to = anchor(target.pos());
        scene.lines.push(EdgeLine {
            edge_id: edge_id.clone(),
            from,
            to,
            midpoint: from.midpoint(to),
            label: edge.label().map(str::to_owned),
        });
    }

    scene
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub viewbox_padding: f64,
    pub include_labels: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { viewbox_padding: 16.0, include_labels: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

fn scene_bounds(scene: &Scene) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    let mut extend = |x: f64, y: f64| {
        let b = bounds.get_or_insert(Bounds { min_x: x, min_y: y, max_x: x, max_y: y });
        b.min_x = b.min_x.min(x);
        b.min_y = b.min_y.min(y);
        b.max_x = b.max_x.max(x);
        b.max_y = b.max_y.max(y);
    };

    for node_box in &scene.boxes {
        extend(node_box.origin.x, node_box.origin.y);
        extend(node_box.origin.x + node_box.width, node_box.origin.y + node_box.height);
    }
    for line in &scene.lines {
        extend(line.from.x, line.from.y);
        extend(line.to.x, line.to.y);
    }

    bounds
}

fn fmt_coord(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serializes a derived scene as standalone SVG markup.
pub fn render_svg(scene: &Scene, options: &SvgOptions) -> String {
    let bounds = scene_bounds(scene).unwrap_or(Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 100.0,
        max_y: 100.0,
    });
    let pad = options.viewbox_padding.max(0.0);
    let vb_w = (bounds.max_x - bounds.min_x) + pad * 2.0;
    let vb_h = (bounds.max_y - bounds.min_y) + pad * 2.0;

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt_coord(bounds.min_x - pad),
        fmt_coord(bounds.min_y - pad),
        fmt_coord(vb_w.max(1.0)),
        fmt_coord(vb_h.max(1.0))
    );
    out.push_str(
        r#"<style>
.node-box { fill: #f9fafb; stroke: #2563eb; stroke-width: 1; }
.node-title { fill: #1f2937; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 12px; text-anchor: middle; dominant-baseline: middle; }
.edge { fill: none; stroke: #111827; stroke-width: 1; }
.edge-label { fill: #111827; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 11px; text-anchor: middle; dominant-baseline: middle; }
</style>
"#,
    );

    out.push_str(r#"<g class="edges">"#);
    for line in &scene.lines {
        let _ = write!(
            &mut out,
            r#"<line class="edge" x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            fmt_coord(line.from.x),
            fmt_coord(line.from.y),
            fmt_coord(line.to.x),
            fmt_coord(line.to.y)
        );
        if options.include_labels {
            if let Some(label) = &line.label {
                let _ = write!(
                    &mut out,
                    r#"<text class="edge-label" x="{}" y="{}">{}</text>"#,
                    fmt_coord(line.midpoint.x),
                    fmt_coord(line.midpoint.y),
                    escape_xml(label)
                );
            }
        }
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="nodes">"#);
    for node_box in &scene.boxes {
        let _ = write!(
            &mut out,
            r#"<rect class="node-box" x="{}" y="{}" width="{}" height="{}" rx="6" />"#,
            fmt_coord(node_box.origin.x),
            fmt_coord(node_box.origin.y),
            fmt_coord(node_box.width),
            fmt_coord(node_box.height)
        );
        if options.include_labels {
            let center = anchor(node_box.origin);
            let _ = write!(
                &mut out,
                r#"<text class="node-title" x="{}" y="{}">{}</text>"#,
                fmt_coord(center.x),
                fmt_coord(center.y),
                escape_xml(&node_box.title)
            );
        }
    }
    out.push_str("</g>\n");

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::{derive_scene, render_svg, SvgOptions, NODE_HEIGHT, NODE_WIDTH};
    use crate::model::{EdgeId, MapEdge, MapNode, MindMap, NodeId, Point};

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn eid(value: &str) -> EdgeId {
        EdgeId::new(value).expect("edge id")
    }

    fn two_node_map() -> MindMap {
        let mut map = MindMap::default();
        map.nodes_mut().insert(nid("n-1"), MapNode::new("A", Point::new(0.0, 0.0)));
        map.nodes_mut().insert(nid("n-2"), MapNode::new("B", Point::new(200.0, 100.0)));
        map.edges_mut().insert(
            eid("e-1"),
            MapEdge::new_with(nid("n-1"), nid("n-2"), Some("path".to_owned())),
        );
        map
    }

    #[test]
    fn two_nodes_one_edge_yield_two_boxes_one_line() {
        let scene = derive_scene(&two_node_map());

        assert_eq!(scene.boxes.len(), 2);
        assert_eq!(scene.lines.len(), 1);

        let line = &scene.lines[0];
        assert_eq!(line.from, Point::new(NODE_WIDTH / 2.0, NODE_HEIGHT / 2.0));
        assert_eq!(line.to, Point::new(200.0 + NODE_WIDTH / 2.0, 100.0 + NODE_HEIGHT / 2.0));
        assert_eq!(line.midpoint, line.from.midpoint(line.to));
        assert_eq!(line.label.as_deref(), Some("path"));
    }

    #[test]
    fn edge_with_missing_endpoint_produces_no_line() {
        let mut map = two_node_map();
        map.nodes_mut().remove(&nid("n-2"));

        let scene = derive_scene(&map);
        assert_eq!(scene.boxes.len(), 1);
        assert!(scene.lines.is_empty());
    }

    #[test]
    fn svg_contains_boxes_line_and_escaped_labels() {
        let mut map = two_node_map();
        map.nodes_mut()
            .get_mut(&nid("n-1"))
            .expect("node")
            .set_title("Smith & Sons");

        let svg = render_svg(&derive_scene(&map), &SvgOptions::default());

        assert_eq!(svg.matches("<rect").count(), 2);
        assert_eq!(svg.matches("<line").count(), 1);
        assert!(svg.contains("Smith &amp; Sons"));
        assert!(svg.contains(r#"<text class="edge-label""#));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn svg_for_empty_scene_has_fallback_viewbox() {
        let svg = render_svg(&derive_scene(&MindMap::default()), &SvgOptions::default());
        assert!(svg.contains(r#"viewBox="-16 -16 132 132""#));
    }

    #[test]
    fn labels_can_be_suppressed() {
        let options = SvgOptions { include_labels: false, ..SvgOptions::default() };
        let svg = render_svg(&derive_scene(&two_node_map()), &options);
        assert!(!svg.contains("<text"));
    }
}
