//! Error types for the host-facing surface.
//!
//! The layout pipeline itself never fails; these only come out of config
//! validation and the JSON boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MindMapError {
    #[error("canvas dimensions must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("invalid strategy plan: {0}")]
    InvalidPlan(#[source] serde_json::Error),

    #[error("invalid layout config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MindMapError>;
