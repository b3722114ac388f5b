//! Configuration errors.

use thiserror::Error;

/// Errors raised when editor configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_points must be at least 1")]
    ZeroMaxPoints,
    #[error("max_points {requested} is below the current vertex count {current}")]
    MaxPointsBelowVertexCount { requested: usize, current: usize },
    #[error("grid cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),
    #[error("anchor size must be positive and finite, got {width}x{height}")]
    InvalidAnchorSize { width: f64, height: f64 },
    #[error("drag bounds have no area: {0:?}")]
    EmptyDragBounds(kurbo::Rect),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration changes.
pub type ConfigResult<T> = Result<T, ConfigError>;
