//! Placement of newly tapped vertices.
//!
//! Deciding *where* a vertex goes is kept separate from storing it, so a
//! stricter strategy can replace the default one without touching the
//! editor or the vertex store.

use crate::geometry::{segments_intersect, squared_distance};
use kurbo::Point;

/// Vertex counts up to this value always append.
pub const APPEND_ONLY_LEN: usize = 3;

/// Chooses the index at which a candidate vertex is inserted.
pub trait InsertionStrategy {
    /// Return the insertion index for `candidate`, or `None` to reject it.
    ///
    /// An index equal to `vertices.len()` means append.
    fn insertion_index(&self, vertices: &[Point], max_points: usize, candidate: Point) -> Option<usize>;
}

/// Inserts next to the nearest existing vertex, on whichever side keeps
/// the new edge from crossing the nearest vertex's outgoing edge.
///
/// This is a local rule. It does not guarantee a simple polygon.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestVertexInsertion;

impl InsertionStrategy for NearestVertexInsertion {
    fn insertion_index(&self, vertices: &[Point], max_points: usize, candidate: Point) -> Option<usize> {
        insertion_index(vertices, max_points, candidate)
    }
}

/// Index of the vertex closest to `point`. Lowest index wins ties.
pub fn nearest_vertex(vertices: &[Point], point: Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, vertex) in vertices.iter().enumerate() {
        let dist = squared_distance(point, *vertex);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

/// Default insertion rule.
///
/// - At capacity: rejected.
/// - Three or fewer vertices: append.
/// - Otherwise, with `m` the nearest vertex and `prev`/`next` its ring
///   neighbours: if segment `prev -> candidate` meets edge `m -> next`, the
///   candidate goes after `m`, else before it.
pub fn insertion_index(vertices: &[Point], max_points: usize, candidate: Point) -> Option<usize> {
    let n = vertices.len();
    if n >= max_points {
        return None;
    }
    if n <= APPEND_ONLY_LEN {
        return Some(n);
    }

    let m = nearest_vertex(vertices, candidate)?;
    let prev = vertices[(m + n - 1) % n];
    let next = vertices[(m + 1) % n];

    if segments_intersect(prev, candidate, vertices[m], next) {
        Some(m + 1)
    } else {
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_append_while_small() {
        let mut vertices = Vec::new();
        for i in 0..4 {
            let idx = insertion_index(&vertices, 8, Point::new(i as f64, 0.0));
            assert_eq!(idx, Some(vertices.len()));
            vertices.push(Point::new(i as f64, 0.0));
        }
    }

    #[test]
    fn test_rejects_at_capacity() {
        assert_eq!(insertion_index(&square(), 4, Point::new(5.0, 5.0)), None);
        assert_eq!(insertion_index(&[], 0, Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_nearest_vertex_tie_lowest_index() {
        // (5, -5) is equally far from (0,0) and (10,0).
        assert_eq!(nearest_vertex(&square(), Point::new(5.0, -5.0)), Some(0));
        assert_eq!(nearest_vertex(&square(), Point::new(9.0, 9.0)), Some(2));
        assert_eq!(nearest_vertex(&[], Point::ZERO), None);
    }

    #[test]
    fn test_insert_above_top_edge() {
        // Nearest is index 0; segment (0,10)->(5,-5) crosses edge (0,0)->(10,0),
        // so the candidate goes between (0,0) and (10,0).
        assert_eq!(insertion_index(&square(), 8, Point::new(5.0, -5.0)), Some(1));
    }

    #[test]
    fn test_insert_after_nearest_wraps_to_end() {
        // Nearest is (0,10) at index 3. Segment (10,10)->(-3,8) crosses the
        // closing edge (0,10)->(0,0), so the candidate goes after index 3.
        assert_eq!(insertion_index(&square(), 8, Point::new(-3.0, 8.0)), Some(4));
    }

    #[test]
    fn test_insert_before_nearest() {
        // Nearest is (0,10). Segment (10,10)->(-2,14) passes above the
        // closing edge, so the candidate goes before index 3.
        assert_eq!(insertion_index(&square(), 8, Point::new(-2.0, 14.0)), Some(3));
    }

    #[test]
    fn test_strategy_trait_delegates() {
        let strategy = NearestVertexInsertion;
        assert_eq!(
            strategy.insertion_index(&square(), 8, Point::new(5.0, -5.0)),
            insertion_index(&square(), 8, Point::new(5.0, -5.0)),
        );
    }
}
