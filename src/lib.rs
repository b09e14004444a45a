//! Mind map generation for content strategies.
//!
//! `content` (+ optional structured plan) -> outline -> radial layout ->
//! overlap relaxation -> flat node/edge list for the renderer. Everything is
//! synchronous and allocation-only; each call owns its node list.

pub mod error;
pub mod layout;
pub mod output;
pub mod parser;
mod wasm;

use log::debug;

pub use error::{MindMapError, Result};
pub use layout::{LayoutConfig, MindMapNode, NodeKind, ResolveReport};
pub use output::{EdgeOutput, MindMapOutput};
pub use parser::{ParsedOutline, StrategyPlan};

/// Run the whole pipeline. Never fails; callers are expected to pass a
/// config that passes [`LayoutConfig::validate`].
pub fn generate_mind_map(
    content: &str,
    structured: Option<&StrategyPlan>,
    cfg: &LayoutConfig,
) -> MindMapOutput {
    let outline = parser::parse(content, structured);
    let mut nodes = layout::layout_outline(&outline, cfg);
    let report = layout::resolve_overlaps(&mut nodes, cfg);
    debug!(
        "mind map ready: {} nodes, converged={} after {} iterations",
        nodes.len(),
        report.converged,
        report.iterations
    );
    output::to_renderable(&outline, nodes, report)
}

/// JSON-in / JSON-out variant used by the host boundary.
///
/// Empty `plan_json` / `config_json` mean "not supplied".
pub fn generate_from_json(content: &str, plan_json: &str, config_json: &str) -> Result<String> {
    let plan = parse_plan(plan_json)?;
    let cfg = parse_config(config_json)?;
    cfg.validate()?;
    let out = generate_mind_map(content, plan.as_ref(), &cfg);
    Ok(serde_json::to_string(&out)?)
}

/// Outline only, as JSON.
pub fn parse_outline_json(content: &str, plan_json: &str) -> Result<String> {
    let plan = parse_plan(plan_json)?;
    let outline = parser::parse(content, plan.as_ref());
    Ok(serde_json::to_string(&outline)?)
}

fn parse_plan(plan_json: &str) -> Result<Option<StrategyPlan>> {
    if plan_json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(plan_json)
        .map(Some)
        .map_err(MindMapError::InvalidPlan)
}

fn parse_config(config_json: &str) -> Result<LayoutConfig> {
    if config_json.trim().is_empty() {
        return Ok(LayoutConfig::default());
    }
    serde_json::from_str(config_json).map_err(MindMapError::InvalidConfig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_use_defaults() {
        let json = generate_from_json("", "", "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 1);
        assert_eq!(value["edges"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_bad_plan_is_reported() {
        let err = generate_from_json("", "{not json", "").unwrap_err();
        assert!(matches!(err, MindMapError::InvalidPlan(_)));
    }

    #[test]
    fn test_bad_config_is_reported() {
        let err = generate_from_json("", "", r#"{"canvasWidth": "wide"}"#).unwrap_err();
        assert!(matches!(err, MindMapError::InvalidConfig(_)));

        let err = generate_from_json("", "", r#"{"canvasHeight": -5}"#).unwrap_err();
        assert!(matches!(err, MindMapError::InvalidCanvas { .. }));
    }

    #[test]
    fn test_outline_json() {
        let json = parse_outline_json("## Tutorials\ncontent types: video", "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["niche"], "Content Strategy");
        assert_eq!(value["pillars"][0]["contentTypes"][0], "video");
    }
}
