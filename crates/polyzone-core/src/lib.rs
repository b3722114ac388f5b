//! Polyzone Core Library
//!
//! Platform-agnostic editing engine for a single closed polygon drawn over an
//! image or camera feed: tap to add vertices, drag anchors to move them, tap
//! an anchor to delete it, with optional grid snapping and a dimming overlay
//! that cuts the polygon out of the surface.

pub mod anchors;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod insertion;
pub mod mask;
pub mod polygon;
pub mod snap;

pub use anchors::{Anchor, HIT_REGION_SCALE};
pub use config::EditorConfig;
pub use editor::{PolygonChange, PolygonEditor, PolygonListener};
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Orientation, on_segment, orientation, segments_intersect, squared_distance};
pub use input::{DragPhase, EditorCommand};
pub use insertion::{InsertionStrategy, NearestVertexInsertion, insertion_index};
pub use mask::OverlayMask;
pub use polygon::{DEFAULT_MAX_POINTS, EditState, Polygon, outline_path};
pub use snap::{DEFAULT_GRID_SIZE, GridConfig, grid_lines, snap_to_grid};
