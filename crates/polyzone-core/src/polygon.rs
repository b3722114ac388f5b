//! Vertex storage for the edited polygon.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// Default maximum number of vertices.
pub const DEFAULT_MAX_POINTS: usize = 8;

/// Fewest vertices that form a fillable shape.
pub const MIN_VALID_POINTS: usize = 3;

/// Editing phase of a polygon, derived from its vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditState {
    /// No vertices yet.
    Empty,
    /// 1-3 vertices; taps append.
    Growing,
    /// At least 4 vertices; taps go through the insertion heuristic.
    Editable,
    /// At capacity; taps are rejected.
    Full,
}

/// Ordered vertices of an implicitly closed polygon.
///
/// The last vertex connects back to the first; the closing edge is not
/// stored. Mutations that would exceed `max_points` or address a missing
/// vertex are no-ops and return `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    max_points: usize,
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POINTS)
    }
}

impl Polygon {
    /// Create an empty polygon with the given capacity.
    ///
    /// `max_points` is only a limit; storage grows with the vertices.
    pub fn new(max_points: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max_points.min(DEFAULT_MAX_POINTS)),
            max_points,
        }
    }

    /// Maximum number of vertices.
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Change the capacity. Refused if it would drop existing vertices.
    pub fn set_max_points(&mut self, max_points: usize) -> bool {
        if max_points < self.vertices.len() {
            return false;
        }
        self.max_points = max_points;
        true
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether there are enough vertices to render or fill the shape.
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_VALID_POINTS
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.max_points
    }

    /// Current editing phase.
    pub fn state(&self) -> EditState {
        match self.vertices.len() {
            n if n >= self.max_points => EditState::Full,
            0 => EditState::Empty,
            1..=3 => EditState::Growing,
            _ => EditState::Editable,
        }
    }

    /// Get a vertex by index.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    /// The stored vertices in ring order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Snapshot of the ring; the closing edge is left to the consumer.
    pub fn close(&self) -> Vec<Point> {
        self.vertices.clone()
    }

    /// Add a vertex at the end.
    pub fn append(&mut self, point: Point) -> bool {
        if self.is_full() {
            return false;
        }
        self.vertices.push(point);
        true
    }

    /// Insert a vertex before `index`. `index == len` appends.
    pub fn insert_at(&mut self, index: usize, point: Point) -> bool {
        if self.is_full() || index > self.vertices.len() {
            return false;
        }
        self.vertices.insert(index, point);
        true
    }

    /// Remove the vertex at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Point> {
        if index >= self.vertices.len() {
            return None;
        }
        Some(self.vertices.remove(index))
    }

    /// Move the vertex at `index` without changing order or length.
    pub fn replace_at(&mut self, index: usize, point: Point) -> bool {
        match self.vertices.get_mut(index) {
            Some(vertex) => {
                *vertex = point;
                true
            }
            None => false,
        }
    }

    /// Remove all vertices.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Closed outline through the stored vertices.
    pub fn to_path(&self) -> BezPath {
        outline_path(&self.vertices)
    }
}

/// Build a closed outline: move to the first vertex, line through the rest,
/// then close. Empty input gives an empty path.
pub fn outline_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = vertices.split_first() else {
        return path;
    };
    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn square(polygon: &mut Polygon) {
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            polygon.append(Point::new(x, y));
        }
    }

    #[test]
    fn test_append_respects_capacity() {
        let mut polygon = Polygon::new(2);
        assert!(polygon.append(Point::new(1.0, 1.0)));
        assert!(polygon.append(Point::new(2.0, 2.0)));
        assert!(!polygon.append(Point::new(3.0, 3.0)));
        assert_eq!(polygon.len(), 2);
    }

    #[test]
    fn test_huge_capacity_is_a_limit_only() {
        let mut polygon = Polygon::new(usize::MAX);
        assert_eq!(polygon.max_points(), usize::MAX);
        assert!(polygon.vertices.capacity() <= DEFAULT_MAX_POINTS);
        assert!(polygon.append(Point::new(1.0, 1.0)));
        assert_eq!(polygon.state(), EditState::Growing);
    }

    #[test]
    fn test_insert_at() {
        let mut polygon = Polygon::default();
        square(&mut polygon);
        assert!(polygon.insert_at(1, Point::new(5.0, -5.0)));
        assert_eq!(polygon.get(1), Some(Point::new(5.0, -5.0)));
        assert_eq!(polygon.get(2), Some(Point::new(10.0, 0.0)));
        assert!(!polygon.insert_at(9, Point::ZERO));
        assert_eq!(polygon.len(), 5);
    }

    #[test]
    fn test_insert_at_capacity_is_noop() {
        let mut polygon = Polygon::new(4);
        square(&mut polygon);
        assert!(!polygon.insert_at(0, Point::new(5.0, 5.0)));
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_remove_at() {
        let mut polygon = Polygon::default();
        square(&mut polygon);
        assert_eq!(polygon.remove_at(1), Some(Point::new(10.0, 0.0)));
        assert_eq!(
            polygon.vertices(),
            &[Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)]
        );
        assert_eq!(polygon.remove_at(3), None);
        assert_eq!(polygon.len(), 3);
    }

    #[test]
    fn test_replace_at() {
        let mut polygon = Polygon::default();
        square(&mut polygon);
        assert!(polygon.replace_at(2, Point::new(12.0, 12.0)));
        assert_eq!(polygon.get(2), Some(Point::new(12.0, 12.0)));
        assert!(!polygon.replace_at(4, Point::ZERO));
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_validity_and_state() {
        let mut polygon = Polygon::new(5);
        assert_eq!(polygon.state(), EditState::Empty);
        polygon.append(Point::new(0.0, 0.0));
        polygon.append(Point::new(1.0, 0.0));
        assert!(!polygon.is_valid());
        assert_eq!(polygon.state(), EditState::Growing);
        polygon.append(Point::new(1.0, 1.0));
        assert!(polygon.is_valid());
        polygon.append(Point::new(0.0, 1.0));
        assert_eq!(polygon.state(), EditState::Editable);
        polygon.append(Point::new(0.5, 2.0));
        assert_eq!(polygon.state(), EditState::Full);
    }

    #[test]
    fn test_set_max_points_below_len_refused() {
        let mut polygon = Polygon::default();
        square(&mut polygon);
        assert!(!polygon.set_max_points(3));
        assert_eq!(polygon.max_points(), DEFAULT_MAX_POINTS);
        assert!(polygon.set_max_points(4));
        assert!(polygon.is_full());
    }

    #[test]
    fn test_outline_path() {
        let mut polygon = Polygon::default();
        assert!(polygon.to_path().elements().is_empty());

        square(&mut polygon);
        let path = polygon.to_path();
        let els = path.elements();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(els[3], PathEl::LineTo(Point::new(0.0, 10.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }
}
