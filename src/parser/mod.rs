//! Strategy text / plan -> [`ParsedOutline`].
//!
//! A structured plan with pillars always wins over heading extraction from the
//! free text. Parsing never fails: missing pieces fall back to defaults.

mod niche;
mod outline;
mod types;

use log::debug;

pub use niche::NicheExtractor;
pub use outline::OutlineParser;
pub use types::*;

/// Build the outline for a generation request.
pub fn parse(content: &str, structured: Option<&StrategyPlan>) -> ParsedOutline {
    let niche = NicheExtractor::new()
        .extract(structured.and_then(|plan| plan.target_audience_overview.as_deref()));

    let pillars = match structured {
        Some(plan) if !plan.content_pillars.is_empty() => {
            debug!("using {} structured pillars", plan.content_pillars.len());
            plan.content_pillars
                .iter()
                .take(MAX_PILLARS)
                .map(Pillar::from)
                .collect()
        }
        _ => OutlineParser::new().parse_pillars(content),
    };

    debug!("parsed outline: niche={:?}, {} pillars", niche, pillars.len());
    ParsedOutline { niche, pillars }
}
