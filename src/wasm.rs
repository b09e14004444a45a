//! WASM bindings for the mindmap-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::MindMapError;
use crate::output::{ErrorInfo, ErrorOutput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn error_json(e: &MindMapError) -> String {
    console_error(&format!("Error generating mind map: {}", e));
    let out = ErrorOutput {
        error: ErrorInfo { message: e.to_string() },
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{\"error\": {\"message\": \"unknown\"}}".to_string())
}

/// Route `log` records to the browser console.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

/// Generate a laid-out mind map and return it as JSON.
/// Pass empty strings for an absent plan / default config.
#[wasm_bindgen]
pub fn generate_mind_map_json(content: &str, plan_json: &str, config_json: &str) -> String {
    match crate::generate_from_json(content, plan_json, config_json) {
        Ok(json) => json,
        Err(e) => error_json(&e),
    }
}

/// Parse only, returning the outline as JSON.
#[wasm_bindgen]
pub fn parse_outline_json(content: &str, plan_json: &str) -> String {
    match crate::parse_outline_json(content, plan_json) {
        Ok(json) => json,
        Err(e) => error_json(&e),
    }
}
