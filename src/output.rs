//! Output types for the rendering surface.
//!
//! These structs are serialized to JSON and handed to the canvas/SVG layer.

use serde::Serialize;

use crate::layout::{MindMapNode, NodeKind, RectF, ResolveReport};
use crate::parser::ParsedOutline;

/// Display-only stroke hint for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke_width: f64,
    pub color: &'static str,
}

impl EdgeStyle {
    /// Style for edges leaving a node of `kind`.
    pub fn for_source(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Central => EdgeStyle { stroke_width: 3.0, color: "#6366f1" },
            NodeKind::Primary => EdgeStyle { stroke_width: 2.0, color: "#a5b4fc" },
            NodeKind::Secondary => EdgeStyle { stroke_width: 1.0, color: "#cbd5e1" },
        }
    }
}

/// A parent -> child link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeOutput {
    pub from: String,
    pub to: String,
    pub style: EdgeStyle,
}

/// The combined output sent to the renderer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapOutput {
    pub niche: String,
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<EdgeOutput>,
    /// Union of all node boxes, for fitting the viewport.
    pub bounds: RectF,
    pub report: ResolveReport,
}

/// Error payload returned across the host boundary
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    pub error: ErrorInfo,
}

/// Derive edges from `parent_id`, in node order.
pub fn build_edges(nodes: &[MindMapNode]) -> Vec<EdgeOutput> {
    nodes
        .iter()
        .filter_map(|child| {
            let parent_id = child.parent_id.as_ref()?;
            let parent = nodes.iter().find(|n| &n.id == parent_id)?;
            Some(EdgeOutput {
                from: parent.id.clone(),
                to: child.id.clone(),
                style: EdgeStyle::for_source(parent.node_kind),
            })
        })
        .collect()
}

/// Bounding box of all nodes; zero-sized at the origin for an empty list.
pub fn nodes_bounds(nodes: &[MindMapNode]) -> RectF {
    nodes
        .iter()
        .map(MindMapNode::bounds)
        .reduce(|acc, r| acc.union(&r))
        .unwrap_or(RectF { x: 0.0, y: 0.0, w: 0.0, h: 0.0 })
}

pub fn to_renderable(
    outline: &ParsedOutline,
    nodes: Vec<MindMapNode>,
    report: ResolveReport,
) -> MindMapOutput {
    let edges = build_edges(&nodes);
    let bounds = nodes_bounds(&nodes);
    MindMapOutput {
        niche: outline.niche.clone(),
        nodes,
        edges,
        bounds,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutConfig, layout_outline};
    use crate::parser::Pillar;

    fn sample_outline() -> ParsedOutline {
        ParsedOutline {
            niche: "Content Strategy".to_string(),
            pillars: vec![Pillar {
                name: "Tutorials".to_string(),
                description: String::new(),
                keywords: vec!["react".to_string(), "hooks".to_string()],
                content_types: vec!["video".to_string()],
            }],
        }
    }

    #[test]
    fn test_edges_follow_parent_ids() {
        let nodes = layout_outline(&sample_outline(), &LayoutConfig::default());
        let edges = build_edges(&nodes);

        assert_eq!(edges.len(), nodes.len() - 1);
        assert_eq!(edges[0].from, "central");
        assert_eq!(edges[0].to, "primary-0");
        assert_eq!(edges[0].style, EdgeStyle::for_source(NodeKind::Central));
        for e in &edges[1..] {
            assert_eq!(e.from, "primary-0");
            assert_eq!(e.style.stroke_width, 2.0);
        }
    }

    #[test]
    fn test_central_edges_are_thickest() {
        let c = EdgeStyle::for_source(NodeKind::Central);
        let p = EdgeStyle::for_source(NodeKind::Primary);
        assert!(c.stroke_width > p.stroke_width);
    }

    #[test]
    fn test_bounds_cover_every_node() {
        let nodes = layout_outline(&sample_outline(), &LayoutConfig::default());
        let b = nodes_bounds(&nodes);
        for n in &nodes {
            assert!(n.x >= b.x && n.y >= b.y);
            assert!(n.x + n.width <= b.right() + 1e-9);
            assert!(n.y + n.height <= b.bottom() + 1e-9);
        }
        assert_eq!(nodes_bounds(&[]), RectF { x: 0.0, y: 0.0, w: 0.0, h: 0.0 });
    }

    #[test]
    fn test_json_shape() {
        let outline = sample_outline();
        let nodes = layout_outline(&outline, &LayoutConfig::default());
        let report = ResolveReport { converged: true, iterations: 1, adjustments: 0 };
        let value = serde_json::to_value(to_renderable(&outline, nodes, report)).unwrap();

        assert_eq!(value["niche"], "Content Strategy");
        let central = &value["nodes"][0];
        assert_eq!(central["nodeKind"], "central");
        assert_eq!(central["shape"], "circle");
        assert_eq!(central["priority"], "critical");
        assert_eq!(central["category"], "niche");
        assert!(central.get("parentId").is_none());
        assert_eq!(value["nodes"][4]["category"], "content-type");
        assert_eq!(value["nodes"][1]["parentId"], "central");
        assert_eq!(value["edges"][0]["style"]["strokeWidth"], 3.0);
        assert_eq!(value["report"]["converged"], true);
        assert!(value["bounds"]["w"].as_f64().unwrap() > 0.0);
    }
}
