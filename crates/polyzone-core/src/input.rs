//! Input commands delivered by the hosting surface.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Phase of a drag gesture on an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragPhase {
    Begin,
    Change,
    End,
}

/// A single request to the editor.
///
/// Gestures refer to vertices by index only; the editor decides whether the
/// index is still meaningful when the command arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorCommand {
    /// Tap on empty surface: add a vertex.
    Tap { position: Point },
    /// Drag of the anchor for vertex `index`.
    Drag {
        index: usize,
        position: Point,
        phase: DragPhase,
    },
    /// Tap on the anchor for vertex `index`: delete it.
    ActivateAnchor { index: usize },
    /// Remove every vertex.
    Clear,
    SetMaxPoints(usize),
    SetGridEnabled(bool),
    SetGridCellSize(f64),
    SetAnchorSize(Size),
    /// `None` falls back to the editing surface.
    SetDragBounds(Option<Rect>),
}
