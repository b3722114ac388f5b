//! Polygon editor: routes input commands to the vertex store.

use crate::anchors::{self, Anchor, rect_contains};
use crate::config::{self, EditorConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::input::{DragPhase, EditorCommand};
use crate::insertion::{InsertionStrategy, NearestVertexInsertion};
use crate::mask::OverlayMask;
use crate::polygon::{EditState, Polygon};
use crate::snap::{self, GridConfig};
use kurbo::{BezPath, Point, Rect, Size};
use std::fmt;

/// Snapshot sent to listeners after every mutation.
#[derive(Debug, Clone)]
pub struct PolygonChange {
    /// Vertices in ring order.
    pub vertices: Vec<Point>,
    /// Closed outline through the vertices.
    pub path: BezPath,
    /// Whether the polygon has enough vertices to be used.
    pub is_valid: bool,
}

impl PolygonChange {
    /// Overlay mask for this snapshot over `outer`.
    pub fn overlay_mask(&self, outer: Rect) -> OverlayMask {
        OverlayMask::build(outer, &self.vertices)
    }
}

/// Receives polygon snapshots (renderer, overlay, host bookkeeping).
pub trait PolygonListener {
    fn polygon_changed(&mut self, change: &PolygonChange);
}

impl<F> PolygonListener for F
where
    F: FnMut(&PolygonChange),
{
    fn polygon_changed(&mut self, change: &PolygonChange) {
        self(change)
    }
}

/// Interactive editor for a single closed polygon.
///
/// Every input method returns `true` when the polygon changed. Invalid
/// requests are absorbed: nothing changes and listeners are not called.
pub struct PolygonEditor {
    /// Editing surface; the outer rectangle of the overlay mask.
    surface: Rect,
    polygon: Polygon,
    grid: GridConfig,
    anchor_size: Size,
    /// Explicit drag bounds. `None` means the surface.
    drag_bounds: Option<Rect>,
    /// Vertex index of the drag in progress.
    active_drag: Option<usize>,
    strategy: Box<dyn InsertionStrategy>,
    listeners: Vec<Box<dyn PolygonListener>>,
}

impl fmt::Debug for PolygonEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolygonEditor")
            .field("surface", &self.surface)
            .field("polygon", &self.polygon)
            .field("grid", &self.grid)
            .field("anchor_size", &self.anchor_size)
            .field("drag_bounds", &self.drag_bounds)
            .field("active_drag", &self.active_drag)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl PolygonEditor {
    /// Create an editor with the default configuration.
    pub fn new(surface: Rect) -> Self {
        let config = EditorConfig::default();
        Self {
            surface,
            polygon: Polygon::new(config.max_points),
            grid: config.grid,
            anchor_size: config.anchor_size,
            drag_bounds: config.drag_bounds,
            active_drag: None,
            strategy: Box::new(NearestVertexInsertion),
            listeners: Vec::new(),
        }
    }

    /// Create an editor from a validated configuration.
    pub fn with_config(surface: Rect, config: EditorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mut editor = Self::new(surface);
        editor.polygon = Polygon::new(config.max_points);
        editor.grid = config.grid;
        editor.anchor_size = config.anchor_size;
        editor.drag_bounds = config.drag_bounds;
        Ok(editor)
    }

    /// Replace the insertion rule used for taps.
    pub fn with_strategy(mut self, strategy: impl InsertionStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Register a listener for polygon changes.
    pub fn add_listener(&mut self, listener: impl PolygonListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // --- Queries ---

    pub fn surface(&self) -> Rect {
        self.surface
    }

    /// Resize the editing surface. Vertices are left where they are.
    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    pub fn is_valid(&self) -> bool {
        self.polygon.is_valid()
    }

    pub fn state(&self) -> EditState {
        self.polygon.state()
    }

    /// Vertex index of the drag in progress, if any.
    pub fn active_drag(&self) -> Option<usize> {
        self.active_drag
    }

    /// Rectangle anchor hit regions must stay inside.
    pub fn drag_bounds(&self) -> Rect {
        self.drag_bounds.unwrap_or(self.surface)
    }

    /// Current configuration.
    pub fn config(&self) -> EditorConfig {
        EditorConfig {
            max_points: self.polygon.max_points(),
            grid: self.grid,
            anchor_size: self.anchor_size,
            drag_bounds: self.drag_bounds,
        }
    }

    /// Closed outline through the vertices.
    pub fn closed_path(&self) -> BezPath {
        self.polygon.to_path()
    }

    /// Overlay mask over the editing surface.
    pub fn overlay_mask(&self) -> OverlayMask {
        OverlayMask::build(self.surface, self.polygon.vertices())
    }

    /// Grid lines across the editing surface.
    pub fn grid_lines(&self) -> BezPath {
        snap::grid_lines(self.surface, self.grid.cell_size)
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        anchors::anchors_for(self.polygon.vertices(), self.anchor_size)
    }

    /// Index of the anchor under `point`.
    pub fn hit_test_anchor(&self, point: Point) -> Option<usize> {
        anchors::hit_test_anchor(self.polygon.vertices(), self.anchor_size, point)
    }

    // --- Input ---

    /// Add a vertex for a tap on the surface.
    pub fn on_tap(&mut self, position: Point) -> bool {
        if !position.is_finite() {
            log::debug!("Tap at non-finite position {:?} rejected", position);
            return false;
        }
        let candidate = self.grid.apply(position);
        let vertices = self.polygon.vertices();
        let Some(index) = self.strategy.insertion_index(vertices, self.polygon.max_points(), candidate) else {
            log::debug!("Tap at {:?} rejected: polygon is full", position);
            return false;
        };

        if !self.polygon.insert_at(index, candidate) {
            log::debug!("Tap at {:?} rejected: insertion index {} out of range", position, index);
            return false;
        }

        log::debug!("Inserted vertex {:?} at index {}", candidate, index);
        self.cancel_drag();
        self.notify();
        true
    }

    /// Move a vertex for one phase of an anchor drag.
    ///
    /// `Begin` opens a drag session for `index`; `Change` and `End` are only
    /// accepted for that same index. A move whose hit region would leave the
    /// drag bounds is dropped for that event. On `End` the position snaps to
    /// the grid when enabled.
    pub fn on_drag(&mut self, index: usize, position: Point, phase: DragPhase) -> bool {
        if !position.is_finite() {
            log::debug!("Drag of vertex {} to non-finite position {:?} rejected", index, position);
            return false;
        }
        let Some(current) = self.polygon.get(index) else {
            log::debug!("Drag on missing vertex {}", index);
            if self.active_drag == Some(index) {
                self.cancel_drag();
            }
            return false;
        };

        match phase {
            DragPhase::Begin => self.active_drag = Some(index),
            DragPhase::Change | DragPhase::End if self.active_drag != Some(index) => {
                log::debug!("Drag {:?} on vertex {} without an active drag", phase, index);
                return false;
            }
            DragPhase::Change | DragPhase::End => {}
        }
        if phase == DragPhase::End {
            self.active_drag = None;
        }

        let mut target = if self.move_allowed(position) {
            position
        } else {
            log::debug!("Drag of vertex {} to {:?} leaves the drag bounds", index, position);
            current
        };

        if phase == DragPhase::End && self.grid.enabled {
            let snapped = snap::snap_to_grid(target, self.grid.cell_size);
            if self.move_allowed(snapped) {
                target = snapped;
            }
        }

        if target == current {
            return false;
        }

        log::trace!("Vertex {} {:?} -> {:?} ({:?})", index, current, target, phase);
        self.polygon.replace_at(index, target);
        self.notify();
        true
    }

    /// Delete the vertex whose anchor was activated.
    pub fn on_anchor_activate(&mut self, index: usize) -> bool {
        match self.polygon.remove_at(index) {
            Some(removed) => {
                log::debug!("Removed vertex {} at {:?}", index, removed);
                self.cancel_drag();
                self.notify();
                true
            }
            None => {
                log::debug!("Anchor activation on missing vertex {}", index);
                false
            }
        }
    }

    /// Remove every vertex.
    pub fn clear(&mut self) -> bool {
        if self.polygon.is_empty() {
            return false;
        }
        self.polygon.clear();
        self.cancel_drag();
        self.notify();
        true
    }

    /// Apply a command from the host.
    ///
    /// Configuration errors are logged and absorbed like any other rejected
    /// input. Returns `true` if the polygon changed.
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        let result = match command {
            EditorCommand::Tap { position } => return self.on_tap(position),
            EditorCommand::Drag { index, position, phase } => return self.on_drag(index, position, phase),
            EditorCommand::ActivateAnchor { index } => return self.on_anchor_activate(index),
            EditorCommand::Clear => return self.clear(),
            EditorCommand::SetMaxPoints(max_points) => self.set_max_points(max_points),
            EditorCommand::SetGridEnabled(enabled) => {
                self.set_grid_enabled(enabled);
                Ok(())
            }
            EditorCommand::SetGridCellSize(cell_size) => self.set_grid_cell_size(cell_size),
            EditorCommand::SetAnchorSize(size) => self.set_anchor_size(size),
            EditorCommand::SetDragBounds(bounds) => self.set_drag_bounds(bounds),
        };
        if let Err(err) = result {
            log::warn!("Configuration change refused: {}", err);
        }
        false
    }

    // --- Configuration ---

    /// Change the vertex limit. Refused if it is below the current count.
    pub fn set_max_points(&mut self, max_points: usize) -> ConfigResult<()> {
        config::validate_max_points(max_points)?;
        if !self.polygon.set_max_points(max_points) {
            return Err(ConfigError::MaxPointsBelowVertexCount {
                requested: max_points,
                current: self.polygon.len(),
            });
        }
        Ok(())
    }

    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.grid.enabled = enabled;
    }

    pub fn set_grid_cell_size(&mut self, cell_size: f64) -> ConfigResult<()> {
        config::validate_cell_size(cell_size)?;
        self.grid.cell_size = cell_size;
        Ok(())
    }

    pub fn set_anchor_size(&mut self, size: Size) -> ConfigResult<()> {
        config::validate_anchor_size(size)?;
        self.anchor_size = size;
        Ok(())
    }

    /// Set the drag bounds; `None` uses the editing surface.
    pub fn set_drag_bounds(&mut self, bounds: Option<Rect>) -> ConfigResult<()> {
        if let Some(bounds) = bounds {
            config::validate_drag_bounds(bounds)?;
        }
        self.drag_bounds = bounds;
        Ok(())
    }

    // --- Internals ---

    fn move_allowed(&self, position: Point) -> bool {
        rect_contains(self.drag_bounds(), anchors::hit_region(position, self.anchor_size))
    }

    /// Indices shift on insert/remove, so an open drag session is dropped.
    fn cancel_drag(&mut self) {
        if let Some(index) = self.active_drag.take() {
            log::debug!("Drag on vertex {} cancelled", index);
        }
    }

    fn notify(&mut self) {
        let change = PolygonChange {
            vertices: self.polygon.close(),
            path: self.polygon.to_path(),
            is_valid: self.polygon.is_valid(),
        };
        for listener in &mut self.listeners {
            listener.polygon_changed(&change);
        }
    }
}
