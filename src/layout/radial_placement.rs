// Radial Tree Layout Algorithm ("Orbital" Layout)
//
// Places the map in rings:
// 1. The central node sits at the canvas centre
// 2. Primary nodes orbit the central node
// 3. Secondary nodes orbit their primary node, starting on the side facing
//    away from the hub
//
// Ring radius adapts to the number of items so that neighbours on a ring are
// never closer (along the circumference) than the kind's minimum spacing.
//
// Properties:
// - Deterministic (no randomness)
// - Positions are node centres; callers convert to top-left boxes

use std::f64::consts::PI;

use super::{PointF, SizeF};

/// One position on a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSlot {
    pub x: f64,
    pub y: f64,
    /// Angle (radians) of this slot as seen from the ring centre.
    pub angle: f64,
}

impl RadialSlot {
    pub fn center(&self) -> PointF {
        PointF { x: self.x, y: self.y }
    }
}

/// Top-left position that centres a box of `size` on the canvas.
pub fn place_central(canvas: SizeF, size: SizeF) -> PointF {
    PointF {
        x: canvas.w / 2.0 - size.w / 2.0,
        y: canvas.h / 2.0 - size.h / 2.0,
    }
}

/// Radius that fits `count` items at `spacing`, never below `base_radius`.
pub fn ring_radius(count: usize, base_radius: f64, spacing: f64) -> f64 {
    let required_circumference = count as f64 * spacing;
    base_radius.max(required_circumference / (2.0 * PI))
}

/// Spread `count` centres evenly on a circle around `parent_center`, keeping
/// ring neighbours at least `spacing` apart along the circumference.
pub fn place_children(
    parent_center: PointF,
    count: usize,
    base_radius: f64,
    start_angle: f64,
    spacing: f64,
) -> Vec<RadialSlot> {
    if count == 0 {
        return Vec::new();
    }

    let radius = ring_radius(count, base_radius, spacing);
    let step = 2.0 * PI / count as f64;

    (0..count)
        .map(|i| {
            let angle = start_angle + i as f64 * step;
            RadialSlot {
                x: parent_center.x + angle.cos() * radius,
                y: parent_center.y + angle.sin() * radius,
                angle,
            }
        })
        .collect()
}

/// Direction (radians) pointing from `from` toward `to`.
pub fn bearing(from: PointF, to: PointF) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Start angle for a secondary ring: opposite the bearing back to the hub.
pub fn secondary_start_angle(primary_center: PointF, hub_center: PointF) -> f64 {
    bearing(primary_center, hub_center) + PI
}
