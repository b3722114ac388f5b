//! Anchor handles for polygon vertices.
//!
//! An anchor only knows the index of its vertex. Gestures on it are sent
//! back to the editor as `(index, event)` commands.

use kurbo::{Point, Rect, Size};

/// The hit region is this many times the visible anchor size.
pub const HIT_REGION_SCALE: f64 = 2.5;

/// A draggable, tappable handle on one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Index of the vertex in the polygon.
    pub index: usize,
    /// Vertex position.
    pub position: Point,
    /// Area that receives taps and drags.
    pub hit_region: Rect,
}

impl Anchor {
    /// Create an anchor for the vertex at `index`.
    pub fn new(index: usize, position: Point, anchor_size: Size) -> Self {
        Self {
            index,
            position,
            hit_region: hit_region(position, anchor_size),
        }
    }

    /// Check if a point falls inside the anchor's hit region.
    pub fn contains(&self, point: Point) -> bool {
        rect_contains(self.hit_region, Rect::from_points(point, point))
    }
}

/// Hit region of an anchor centered on `center`.
pub fn hit_region(center: Point, anchor_size: Size) -> Rect {
    Rect::from_center_size(center, anchor_size * HIT_REGION_SCALE)
}

/// Check if `inner` lies within `outer`, edges included.
pub fn rect_contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// Build anchors for every vertex.
pub fn anchors_for(vertices: &[Point], anchor_size: Size) -> Vec<Anchor> {
    vertices
        .iter()
        .enumerate()
        .map(|(index, &position)| Anchor::new(index, position, anchor_size))
        .collect()
}

/// Find the anchor under `point`.
///
/// Later anchors are drawn on top, so the highest index wins.
pub fn hit_test_anchor(vertices: &[Point], anchor_size: Size, point: Point) -> Option<usize> {
    anchors_for(vertices, anchor_size)
        .iter()
        .rev()
        .find(|anchor| anchor.contains(point))
        .map(|anchor| anchor.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(10.0, 10.0);

    #[test]
    fn test_hit_region_is_scaled() {
        let anchor = Anchor::new(0, Point::new(50.0, 50.0), SIZE);
        assert_eq!(anchor.hit_region, Rect::new(37.5, 37.5, 62.5, 62.5));
        assert!(anchor.contains(Point::new(62.5, 40.0)));
        assert!(!anchor.contains(Point::new(63.0, 40.0)));
    }

    #[test]
    fn test_contains_includes_edges_and_corners() {
        let anchor = Anchor::new(3, Point::new(50.0, 50.0), SIZE);
        assert!(anchor.contains(Point::new(37.5, 37.5)));
        assert!(anchor.contains(Point::new(62.5, 62.5)));
        assert!(anchor.contains(Point::new(50.0, 37.5)));
        assert!(!anchor.contains(Point::new(37.4, 50.0)));
        assert!(!anchor.contains(Point::new(50.0, 62.6)));
        assert!(!anchor.contains(Point::new(f64::NAN, 50.0)));
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let vertices = [Point::new(10.0, 10.0), Point::new(20.0, 10.0), Point::new(90.0, 90.0)];
        // (15, 10) is inside both the first and second hit regions.
        assert_eq!(hit_test_anchor(&vertices, SIZE, Point::new(15.0, 10.0)), Some(1));
        assert_eq!(hit_test_anchor(&vertices, SIZE, Point::new(88.0, 95.0)), Some(2));
        assert_eq!(hit_test_anchor(&vertices, SIZE, Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_rect_contains_inclusive() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(rect_contains(outer, Rect::new(0.0, 0.0, 25.0, 25.0)));
        assert!(rect_contains(outer, Rect::new(75.0, 75.0, 100.0, 100.0)));
        assert!(!rect_contains(outer, Rect::new(-1.0, 10.0, 24.0, 35.0)));
    }
}
