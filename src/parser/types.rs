use serde::{Deserialize, Serialize};

/// Niche used when nothing usable can be extracted.
pub const DEFAULT_NICHE: &str = "Content Strategy";

/// Maximum number of pillars kept in an outline.
pub const MAX_PILLARS: usize = 4;
/// Maximum number of keywords kept per pillar.
pub const MAX_KEYWORDS: usize = 3;
/// Maximum number of content types kept per pillar.
pub const MAX_CONTENT_TYPES: usize = 3;
/// Leaves drawn per pillar: keywords first, then content types fill the rest.
pub const MAX_LEAVES_PER_PILLAR: usize = 3;

/// Hierarchical outline extracted from strategy text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOutline {
    /// Root label of the map.
    pub niche: String,
    /// Top-level themes, earliest found first.
    pub pillars: Vec<Pillar>,
}

impl ParsedOutline {
    /// Number of nodes the outline expands to, root included.
    pub fn node_count(&self) -> usize {
        1 + self
            .pillars
            .iter()
            .map(|p| 1 + p.leaf_count())
            .sum::<usize>()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub name: String,
    /// May be empty
    pub description: String,
    pub keywords: Vec<String>,
    pub content_types: Vec<String>,
}

impl Pillar {
    /// Enforce the per-pillar caps, keeping the earliest entries.
    pub fn truncate_to_caps(&mut self) {
        self.keywords.truncate(MAX_KEYWORDS);
        self.content_types.truncate(MAX_CONTENT_TYPES);
    }

    /// Number of leaf nodes this pillar expands to.
    pub fn leaf_count(&self) -> usize {
        (self.keywords.len() + self.content_types.len()).min(MAX_LEAVES_PER_PILLAR)
    }
}

/// Structured plan as produced by the strategy generator.
///
/// Field names follow the JSON the host hands over (`pillarName`,
/// `contentTypes`, ...). Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPlan {
    #[serde(default)]
    pub target_audience_overview: Option<String>,
    #[serde(default)]
    pub content_pillars: Vec<PlanPillar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPillar {
    pub pillar_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub content_types: Vec<String>,
}

impl From<&PlanPillar> for Pillar {
    fn from(p: &PlanPillar) -> Self {
        let mut pillar = Pillar {
            name: p.pillar_name.clone(),
            description: p.description.clone().unwrap_or_default(),
            keywords: p.keywords.clone(),
            content_types: p.content_types.clone(),
        };
        pillar.truncate_to_caps();
        pillar
    }
}
