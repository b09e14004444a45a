// Mind map layouter.
//
// Goals:
// - Deterministic: no randomness, no time budgets, ids derived from structure
// - Radial: niche at the canvas centre, pillars around it, leaves around pillars
// - Relaxed: pairwise repulsion pass until kind-dependent spacing holds
//
// Submodules:
// - sizing: per-kind box and font heuristics
// - radial_placement: ring placement
// - overlap: iterative overlap resolution
//
// Output:
// - Flat Vec<MindMapNode>: central first, then each primary followed by its
//   secondaries.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MindMapError, Result};
use crate::parser::{MAX_LEAVES_PER_PILLAR, ParsedOutline, Pillar};

mod node;
mod overlap;
mod radial_placement;
mod sizing;

pub use node::{Category, MindMapNode, NodeKind, NodeShape, Priority};
pub use overlap::{
    ResolveReport, SpacingViolation, effective_min_distance, pair_min_distance, resolve_overlaps,
    spacing_violations,
};
pub use radial_placement::{RadialSlot, place_central, place_children, ring_radius};
pub use sizing::{SizingRule, font_size_of, size_of};

use radial_placement::secondary_start_angle;

pub const CENTRAL_ID: &str = "central";

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SizeF {
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }

    pub fn union(&self, other: &RectF) -> RectF {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        RectF { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }
}

/// Tunables for layout and relaxation. Every field has a default, so hosts
/// may send a partial JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Ring radius for primaries before growing to fit.
    pub primary_base_radius: f64,
    /// Minimum circumferential spacing between primaries.
    pub primary_min_spacing: f64,
    /// Angle of the first primary (radians); -π/2 is 12 o'clock.
    pub primary_start_angle: f64,
    pub secondary_base_radius: f64,
    pub secondary_min_spacing: f64,
    /// Resolver iteration cap.
    pub max_iterations: usize,
    /// Fraction of a pair's deficit closed per push.
    pub damping: f64,
    /// Pairs within this many px of their minimum count as spaced.
    pub tolerance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1200.0,
            canvas_height: 800.0,
            primary_base_radius: 450.0,
            primary_min_spacing: 400.0,
            primary_start_angle: -std::f64::consts::FRAC_PI_2,
            secondary_base_radius: 280.0,
            secondary_min_spacing: 280.0,
            max_iterations: 50,
            damping: 0.8,
            tolerance: 0.5,
        }
    }
}

impl LayoutConfig {
    pub fn canvas(&self) -> SizeF {
        SizeF { w: self.canvas_width, h: self.canvas_height }
    }

    pub fn canvas_center(&self) -> PointF {
        PointF { x: self.canvas_width / 2.0, y: self.canvas_height / 2.0 }
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.canvas_width) || !ok(self.canvas_height) {
            return Err(MindMapError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(MindMapError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}

/// Build the radial (unrelaxed) node list for an outline.
pub fn layout_outline(outline: &ParsedOutline, cfg: &LayoutConfig) -> Vec<MindMapNode> {
    let mut nodes: Vec<MindMapNode> = Vec::with_capacity(outline.node_count());

    let hub = cfg.canvas_center();
    let central_size = size_of(&outline.niche, NodeKind::Central);
    let central_pos = place_central(cfg.canvas(), central_size);
    nodes.push(make_node(
        CENTRAL_ID.to_string(),
        &outline.niche,
        NodeKind::Central,
        Category::Niche,
        central_pos,
        None,
    ));

    let primary_slots = place_children(
        hub,
        outline.pillars.len(),
        cfg.primary_base_radius,
        cfg.primary_start_angle,
        cfg.primary_min_spacing,
    );

    for (i, (pillar, slot)) in outline.pillars.iter().zip(&primary_slots).enumerate() {
        let primary_id = format!("primary-{}", i);
        let mut primary = make_node(
            primary_id.clone(),
            &pillar.name,
            NodeKind::Primary,
            Category::Pillar,
            top_left(slot.center(), size_of(&pillar.name, NodeKind::Primary)),
            Some(CENTRAL_ID.to_string()),
        );
        if !pillar.description.is_empty() {
            primary.description = Some(pillar.description.clone());
        }
        nodes.push(primary);

        let leaves = secondary_labels(pillar);
        let leaf_slots = place_children(
            slot.center(),
            leaves.len(),
            cfg.secondary_base_radius,
            secondary_start_angle(slot.center(), hub),
            cfg.secondary_min_spacing,
        );
        for (j, ((text, category), leaf_slot)) in leaves.into_iter().zip(&leaf_slots).enumerate() {
            nodes.push(make_node(
                format!("secondary-{}-{}", i, j),
                text,
                NodeKind::Secondary,
                category,
                top_left(leaf_slot.center(), size_of(text, NodeKind::Secondary)),
                Some(primary_id.clone()),
            ));
        }
    }

    link_connections(&mut nodes);
    debug!(
        "radial layout: {} nodes on a {}x{} canvas",
        nodes.len(),
        cfg.canvas_width,
        cfg.canvas_height
    );
    nodes
}

/// Keywords first, then content types, capped at [`MAX_LEAVES_PER_PILLAR`].
fn secondary_labels(pillar: &Pillar) -> Vec<(&str, Category)> {
    pillar
        .keywords
        .iter()
        .map(|k| (k.as_str(), Category::Keyword))
        .chain(pillar.content_types.iter().map(|c| (c.as_str(), Category::ContentType)))
        .take(MAX_LEAVES_PER_PILLAR)
        .collect()
}

fn top_left(center: PointF, size: SizeF) -> PointF {
    PointF { x: center.x - size.w / 2.0, y: center.y - size.h / 2.0 }
}

fn make_node(
    id: String,
    text: &str,
    kind: NodeKind,
    category: Category,
    pos: PointF,
    parent_id: Option<String>,
) -> MindMapNode {
    let size = size_of(text, kind);
    MindMapNode {
        id,
        text: text.to_string(),
        x: pos.x,
        y: pos.y,
        width: size.w,
        height: size.h,
        node_kind: kind,
        level: kind.level(),
        shape: kind.shape(),
        connections: Vec::new(),
        priority: kind.priority(),
        category,
        parent_id,
        font_size: font_size_of(text, kind),
        description: None,
    }
}

/// Fill `connections` with parent id followed by child ids.
fn link_connections(nodes: &mut [MindMapNode]) {
    for i in 0..nodes.len() {
        let id = nodes[i].id.clone();
        let mut connections: Vec<String> = nodes[i].parent_id.iter().cloned().collect();
        connections.extend(
            nodes
                .iter()
                .filter(|n| n.parent_id.as_deref() == Some(id.as_str()))
                .map(|n| n.id.clone()),
        );
        nodes[i].connections = connections;
    }
}
