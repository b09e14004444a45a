use serde::Serialize;

use super::{PointF, RectF};

/// Depth class of a node in the map.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Central,
    Primary,
    Secondary,
}

impl NodeKind {
    pub fn level(self) -> u8 {
        match self {
            NodeKind::Central => 0,
            NodeKind::Primary => 1,
            NodeKind::Secondary => 2,
        }
    }

    pub fn shape(self) -> NodeShape {
        match self {
            NodeKind::Central => NodeShape::Circle,
            NodeKind::Primary => NodeShape::Ellipse,
            NodeKind::Secondary => NodeShape::Rectangle,
        }
    }

    pub fn priority(self) -> Priority {
        match self {
            NodeKind::Central => Priority::Critical,
            NodeKind::Primary => Priority::High,
            NodeKind::Secondary => Priority::Medium,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Circle,
    Rectangle,
    Ellipse,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Niche,
    Pillar,
    Keyword,
    ContentType,
}

/// A laid-out mind map node. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub node_kind: NodeKind,
    pub level: u8,
    pub shape: NodeShape,
    /// Parent id first (if any), then children in placement order.
    pub connections: Vec<String>,
    pub priority: Priority,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub font_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MindMapNode {
    pub fn center(&self) -> PointF {
        PointF {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn bounds(&self) -> RectF {
        RectF { x: self.x, y: self.y, w: self.width, h: self.height }
    }

    /// Larger side of the box; used as the node's footprint when spacing.
    pub fn footprint(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(x: f64, y: f64) -> MindMapNode {
        let kind = NodeKind::Secondary;
        MindMapNode {
            id: "secondary-0-0".to_string(),
            text: "react".to_string(),
            x,
            y,
            width: 120.0,
            height: 70.0,
            node_kind: kind,
            level: kind.level(),
            shape: kind.shape(),
            connections: vec![],
            priority: kind.priority(),
            category: Category::Keyword,
            parent_id: Some("primary-0".to_string()),
            font_size: 16.0,
            description: None,
        }
    }

    #[test]
    fn test_translate_moves_box_and_center_together() {
        let mut n = leaf(10.0, 20.0);
        assert_eq!(n.center(), PointF { x: 70.0, y: 55.0 });
        assert_eq!(n.footprint(), 120.0);

        n.translate(-10.0, 5.0);
        assert_eq!(n.bounds(), RectF { x: 0.0, y: 25.0, w: 120.0, h: 70.0 });
        assert_eq!(n.center(), PointF { x: 60.0, y: 60.0 });
    }
}
