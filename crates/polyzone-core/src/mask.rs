//! Overlay mask that dims everything outside the polygon.

use crate::polygon::{MIN_VALID_POINTS, outline_path};
use kurbo::{BezPath, Point, Rect};
use peniko::Fill;

/// Fillable "surface minus polygon" region.
///
/// The path holds the outer rectangle followed by the polygon ring; filling
/// it with [`OverlayMask::fill`] leaves the polygon interior uncovered.
#[derive(Debug, Clone)]
pub struct OverlayMask {
    /// Outer rectangle, then the polygon outline when there is one.
    pub path: BezPath,
    /// Fill rule the path must be rendered with.
    pub fill: Fill,
    /// Whether a polygon was cut out of the rectangle.
    pub has_cutout: bool,
}

impl OverlayMask {
    /// Build the mask for `vertices` over `outer`.
    ///
    /// With fewer than three vertices nothing is cut out and the mask covers
    /// the whole rectangle.
    pub fn build(outer: Rect, vertices: &[Point]) -> Self {
        let mut path = rect_path(outer);
        let has_cutout = vertices.len() >= MIN_VALID_POINTS;
        if has_cutout {
            path.extend(outline_path(vertices).elements().iter().copied());
        }
        Self {
            path,
            fill: Fill::EvenOdd,
            has_cutout,
        }
    }
}

fn rect_path(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(Point::new(rect.x0, rect.y0));
    path.line_to(Point::new(rect.x1, rect.y0));
    path.line_to(Point::new(rect.x1, rect.y1));
    path.line_to(Point::new(rect.x0, rect.y1));
    path.close_path();
    path
}
