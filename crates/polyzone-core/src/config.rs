//! Editor configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::polygon::DEFAULT_MAX_POINTS;
use crate::snap::GridConfig;
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Default anchor size (the visible dot, not the hit region).
pub const DEFAULT_ANCHOR_SIZE: Size = Size::new(10.0, 10.0);

/// Settings for a [`PolygonEditor`](crate::PolygonEditor).
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of vertices.
    pub max_points: usize,
    /// Grid snapping.
    pub grid: GridConfig,
    /// Anchor size; the hit region is 2.5 times larger.
    pub anchor_size: Size,
    /// Rectangle anchor hit regions must stay inside while dragging.
    /// `None` uses the editing surface.
    pub drag_bounds: Option<Rect>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            grid: GridConfig::default(),
            anchor_size: DEFAULT_ANCHOR_SIZE,
            drag_bounds: None,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for a usable value.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_max_points(self.max_points)?;
        validate_cell_size(self.grid.cell_size)?;
        validate_anchor_size(self.anchor_size)?;
        if let Some(bounds) = self.drag_bounds {
            validate_drag_bounds(bounds)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_max_points(max_points: usize) -> ConfigResult<()> {
    if max_points == 0 {
        return Err(ConfigError::ZeroMaxPoints);
    }
    Ok(())
}

pub(crate) fn validate_cell_size(cell_size: f64) -> ConfigResult<()> {
    if cell_size <= 0.0 || !cell_size.is_finite() {
        return Err(ConfigError::InvalidCellSize(cell_size));
    }
    Ok(())
}

pub(crate) fn validate_anchor_size(size: Size) -> ConfigResult<()> {
    let ok = |v: f64| v > 0.0 && v.is_finite();
    if !ok(size.width) || !ok(size.height) {
        return Err(ConfigError::InvalidAnchorSize {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

pub(crate) fn validate_drag_bounds(bounds: Rect) -> ConfigResult<()> {
    if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
        return Err(ConfigError::EmptyDragBounds(bounds));
    }
    Ok(())
}
