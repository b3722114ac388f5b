//! Geometry primitives used by the insertion heuristic and the grid snapper.
//!
//! All comparisons are exact. Collinearity is an exact zero cross product,
//! so results are deterministic for a given set of inputs.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Squared Euclidean distance between two points.
///
/// Only meaningful for comparing distances; it is not a linear unit.
pub fn squared_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x) * (a.x - b.x) + (a.y - b.y) * (a.y - b.y)
}

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the ordered triple `(p, q, r)`.
///
/// Positive cross product is clockwise in a y-down surface.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Check if `q` lies within the bounding box of `p` and `r`.
///
/// Only answers "q is on segment pr" when the three points are collinear.
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Check if segment `p1q1` intersects segment `p2q2`.
///
/// Touching at an endpoint counts as an intersection.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    // General case
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // p2 on p1q1
    if o1 == Orientation::Collinear && on_segment(p1, p2, q1) {
        return true;
    }
    // q2 on p1q1
    if o2 == Orientation::Collinear && on_segment(p1, q2, q1) {
        return true;
    }
    // p1 on p2q2
    if o3 == Orientation::Collinear && on_segment(p2, p1, q2) {
        return true;
    }
    // q1 on p2q2
    o4 == Orientation::Collinear && on_segment(p2, q1, q2)
}
