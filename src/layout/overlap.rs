// Overlap resolution by iterative pairwise repulsion.
//
// Every unordered pair of nodes has a minimum centre distance made of a
// per-kind-pair base value plus half of both footprints. Pairs that are too
// close are pushed apart along their centre vector, in place, pair by pair.
// The central node is anchored; its partner takes the whole damped push.
//
// O(iterations * n^2); maps are capped well below 50 nodes.

use log::{trace, warn};
use serde::Serialize;

use super::LayoutConfig;
use super::node::{MindMapNode, NodeKind};

/// Base minimum centre distance for a pair of kinds (order-independent).
pub fn pair_min_distance(a: NodeKind, b: NodeKind) -> f64 {
    use NodeKind::*;
    match (a, b) {
        (Central, Primary) | (Primary, Central) => 480.0,
        (Central, Secondary) | (Secondary, Central) => 600.0,
        (Primary, Secondary) | (Secondary, Primary) => 320.0,
        (Secondary, Secondary) => 250.0,
        // a map has a single root; two centrals get primary spacing
        (Primary, Primary) | (Central, Central) => 420.0,
    }
}

/// Base distance plus half of each node's footprint.
pub fn effective_min_distance(a: &MindMapNode, b: &MindMapNode) -> f64 {
    pair_min_distance(a.node_kind, b.node_kind) + (a.footprint() + b.footprint()) / 2.0
}

/// Outcome of a resolver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveReport {
    /// An iteration finished without moving anything.
    pub converged: bool,
    /// Iterations executed, including the final quiet one.
    pub iterations: usize,
    /// Total number of pair pushes applied.
    pub adjustments: usize,
}

/// Push nodes apart until every pair is spaced, or the iteration cap is hit.
pub fn resolve_overlaps(nodes: &mut [MindMapNode], cfg: &LayoutConfig) -> ResolveReport {
    let mut adjustments = 0;

    for iteration in 1..=cfg.max_iterations {
        let mut moved = 0;

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let (head, tail) = nodes.split_at_mut(j);
                if push_apart(&mut head[i], &mut tail[0], cfg) {
                    moved += 1;
                }
            }
        }

        trace!("overlap iteration {}: {} pushes", iteration, moved);
        adjustments += moved;

        if moved == 0 {
            return ResolveReport { converged: true, iterations: iteration, adjustments };
        }
    }

    warn!(
        "overlap resolution stopped after {} iterations without converging",
        cfg.max_iterations
    );
    ResolveReport {
        converged: false,
        iterations: cfg.max_iterations,
        adjustments,
    }
}

/// Returns true if the pair was too close and got moved.
fn push_apart(a: &mut MindMapNode, b: &mut MindMapNode, cfg: &LayoutConfig) -> bool {
    let ca = a.center();
    let cb = b.center();
    let dx = cb.x - ca.x;
    let dy = cb.y - ca.y;
    let dist = (dx * dx + dy * dy).sqrt();
    let min_dist = effective_min_distance(a, b);

    // coincident centres have no direction to push along
    if dist <= 0.0 || dist >= min_dist - cfg.tolerance {
        return false;
    }

    let ux = dx / dist;
    let uy = dy / dist;
    let deficit = (min_dist - dist) * cfg.damping;

    match (a.node_kind, b.node_kind) {
        (NodeKind::Central, _) => b.translate(ux * deficit, uy * deficit),
        (_, NodeKind::Central) => a.translate(-ux * deficit, -uy * deficit),
        _ => {
            let push = deficit / 2.0;
            a.translate(-ux * push, -uy * push);
            b.translate(ux * push, uy * push);
        }
    }
    true
}

/// A pair that is still closer than its effective minimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingViolation {
    pub a: String,
    pub b: String,
    pub distance: f64,
    pub required: f64,
}

/// List every pair closer than its effective minimum (minus tolerance).
pub fn spacing_violations(nodes: &[MindMapNode], cfg: &LayoutConfig) -> Vec<SpacingViolation> {
    let mut out = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let ca = a.center();
            let cb = b.center();
            let distance = ((cb.x - ca.x).powi(2) + (cb.y - ca.y).powi(2)).sqrt();
            let required = effective_min_distance(a, b);
            if distance < required - cfg.tolerance {
                out.push(SpacingViolation {
                    a: a.id.clone(),
                    b: b.id.clone(),
                    distance,
                    required,
                });
            }
        }
    }
    out
}
