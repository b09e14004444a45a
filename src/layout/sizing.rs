// Node box and font size heuristics.
//
// Character-count based, no text measurement. One rule per node kind; the
// rules are ordered so that for equal text a central node is always larger
// (box and font) than a primary, and a primary larger than a secondary.

use super::SizeF;
use super::node::NodeKind;

/// Per-kind sizing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingRule {
    /// Pixels added per character.
    pub px_per_char: f64,
    /// Fixed padding added to the width.
    pub base_width: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub height: f64,
    /// Font size is `font_budget / max(len, font_min_len)` before clamping.
    pub font_budget: f64,
    pub font_min_len: usize,
    pub min_font: f64,
    pub max_font: f64,
}

const CENTRAL_RULE: SizingRule = SizingRule {
    px_per_char: 12.0,
    base_width: 60.0,
    min_width: 300.0,
    max_width: 400.0,
    height: 120.0,
    font_budget: 300.0,
    font_min_len: 8,
    min_font: 20.0,
    max_font: 26.0,
};

const PRIMARY_RULE: SizingRule = SizingRule {
    px_per_char: 10.0,
    base_width: 40.0,
    min_width: 200.0,
    max_width: 280.0,
    height: 100.0,
    font_budget: 200.0,
    font_min_len: 6,
    min_font: 16.0,
    max_font: 20.0,
};

const SECONDARY_RULE: SizingRule = SizingRule {
    px_per_char: 8.0,
    base_width: 30.0,
    min_width: 120.0,
    max_width: 200.0,
    height: 70.0,
    font_budget: 150.0,
    font_min_len: 4,
    min_font: 14.0,
    max_font: 16.0,
};

impl NodeKind {
    pub fn sizing_rule(self) -> &'static SizingRule {
        match self {
            NodeKind::Central => &CENTRAL_RULE,
            NodeKind::Primary => &PRIMARY_RULE,
            NodeKind::Secondary => &SECONDARY_RULE,
        }
    }
}

fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Box size for a label of the given kind.
pub fn size_of(text: &str, kind: NodeKind) -> SizeF {
    let rule = kind.sizing_rule();
    let raw = text_len(text) as f64 * rule.px_per_char + rule.base_width;
    SizeF {
        w: raw.clamp(rule.min_width, rule.max_width),
        h: rule.height,
    }
}

/// Font size in pixels for a label of the given kind.
pub fn font_size_of(text: &str, kind: NodeKind) -> f64 {
    let rule = kind.sizing_rule();
    let len = text_len(text).max(rule.font_min_len) as f64;
    (rule.font_budget / len).clamp(rule.min_font, rule.max_font)
}
