//! Snap functionality for aligning vertices to the grid.

use crate::geometry::squared_distance;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// Default grid cell size (matches the visual grid).
pub const DEFAULT_GRID_SIZE: f64 = 40.0;

/// Grid settings for the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Whether taps and drag releases snap to grid corners.
    pub enabled: bool,
    /// Side length of a grid cell.
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cell_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl GridConfig {
    /// Snap a point if the grid is enabled, otherwise pass it through.
    pub fn apply(&self, point: Point) -> Point {
        if self.enabled {
            snap_to_grid(point, self.cell_size)
        } else {
            point
        }
    }
}

/// Snap a point to the nearest corner of the grid cell containing it.
///
/// Corners are tried in the order top-left, top-right, bottom-right,
/// bottom-left; the first one wins on equal distance.
///
/// Corners are always `index * cell_size`, so snapping a snapped point
/// returns it unchanged.
pub fn snap_to_grid(point: Point, cell_size: f64) -> Point {
    let col = (point.x / cell_size).floor();
    let row = (point.y / cell_size).floor();
    let (x0, x1) = (col * cell_size, (col + 1.0) * cell_size);
    let (y0, y1) = (row * cell_size, (row + 1.0) * cell_size);

    let top_left = Point::new(x0, y0);
    let top_right = Point::new(x1, y0);
    let bottom_right = Point::new(x1, y1);
    let bottom_left = Point::new(x0, y1);

    let mut nearest = top_left;
    let mut min_dist = squared_distance(point, top_left);
    for corner in [top_right, bottom_right, bottom_left] {
        let dist = squared_distance(point, corner);
        if dist < min_dist {
            min_dist = dist;
            nearest = corner;
        }
    }
    nearest
}

/// Build the grid line overlay for a surface.
///
/// Horizontal lines come first, then vertical ones. Lines start at the
/// surface origin and stop before the far edge.
pub fn grid_lines(surface: Rect, cell_size: f64) -> BezPath {
    let mut path = BezPath::new();
    if cell_size <= 0.0 || !cell_size.is_finite() {
        return path;
    }

    let mut y = 0.0;
    while y < surface.height() {
        path.move_to(Point::new(surface.x0, surface.y0 + y));
        path.line_to(Point::new(surface.x1, surface.y0 + y));
        y += cell_size;
    }

    let mut x = 0.0;
    while x < surface.width() {
        path.move_to(Point::new(surface.x0 + x, surface.y0));
        path.line_to(Point::new(surface.x0 + x, surface.y1));
        x += cell_size;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_snap_to_nearest_corner() {
        assert_eq!(snap_to_grid(Point::new(45.0, 62.0), 40.0), Point::new(40.0, 80.0));
        assert_eq!(snap_to_grid(Point::new(75.0, 41.0), 40.0), Point::new(80.0, 40.0));
        assert_eq!(snap_to_grid(Point::new(79.0, 79.0), 40.0), Point::new(80.0, 80.0));
    }

    #[test]
    fn test_snap_exact_corner() {
        assert_eq!(snap_to_grid(Point::new(40.0, 80.0), 40.0), Point::new(40.0, 80.0));
        assert_eq!(snap_to_grid(Point::ZERO, 40.0), Point::ZERO);
    }

    #[test]
    fn test_snap_tie_prefers_top_left() {
        // Cell center is equidistant from all four corners.
        assert_eq!(snap_to_grid(Point::new(20.0, 20.0), 40.0), Point::new(0.0, 0.0));
        // On the top edge midpoint, top-left beats top-right.
        assert_eq!(snap_to_grid(Point::new(60.0, 40.0), 40.0), Point::new(40.0, 40.0));
    }

    #[test]
    fn test_snap_negative_coordinates_stay_in_cell() {
        assert_eq!(snap_to_grid(Point::new(-5.0, -35.0), 40.0), Point::new(0.0, -40.0));
    }

    #[test]
    fn test_snap_fractional_cell_is_stable() {
        let once = snap_to_grid(Point::new(0.888, 1.272), 0.1);
        assert!((once.x - 0.9).abs() < 1e-9);
        assert!((once.y - 1.3).abs() < 1e-9);
        assert_eq!(snap_to_grid(once, 0.1), once);

        for cell in [0.3, 0.7, 1.1, 2.5, 3.3] {
            let once = snap_to_grid(Point::new(17.31, -4.72), cell);
            assert_eq!(snap_to_grid(once, cell), once);
        }
    }

    #[test]
    fn test_grid_config_disabled_passthrough() {
        let grid = GridConfig::default();
        let p = Point::new(13.0, 27.0);
        assert_eq!(grid.apply(p), p);

        let grid = GridConfig { enabled: true, cell_size: 10.0 };
        assert_eq!(grid.apply(p), Point::new(10.0, 30.0));
    }

    #[test]
    fn test_grid_lines() {
        let path = grid_lines(Rect::new(0.0, 0.0, 100.0, 50.0), 40.0);
        let moves: Vec<Point> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        // y = 0, 40 then x = 0, 40, 80
        assert_eq!(
            moves,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 40.0),
                Point::new(0.0, 0.0),
                Point::new(40.0, 0.0),
                Point::new(80.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_grid_lines_invalid_cell() {
        let surface = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(grid_lines(surface, 0.0).elements().is_empty());
        assert!(grid_lines(surface, -4.0).elements().is_empty());
    }
}
