//! Radar chart geometry shared by the SVG certificate and the terminal result
//! screen. Coordinates are screen-style: y grows downward, the first axis
//! points straight up.

use crate::assessment::DimensionScore;
use std::f64::consts::PI;

/// Grid rings, as percentages of the full radius.
pub const RING_LEVELS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];

/// Labels sit just outside the outer ring.
pub const LABEL_LEVEL: f64 = 115.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angle of axis `index` out of `count`, starting at twelve o'clock.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    (index as f64) * 2.0 * PI / (count as f64) - PI / 2.0
}

/// Point on axis `index` at `level` percent of `radius`.
pub fn point_at(index: usize, count: usize, level: f64, center: Point, radius: f64) -> Point {
    let angle = axis_angle(index, count);
    let r = level / 100.0 * radius;
    Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
}

/// Polygon vertices for the score values.
pub fn radar_points(scores: &[DimensionScore], center: Point, radius: f64) -> Vec<Point> {
    let count = scores.len();
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| point_at(i, count, score.value, center, radius))
        .collect()
}

/// Vertices of the grid ring at `level` percent.
pub fn ring(count: usize, level: f64, center: Point, radius: f64) -> Vec<Point> {
    (0..count)
        .map(|i| point_at(i, count, level, center, radius))
        .collect()
}

/// Outer end of every axis line.
pub fn axis_ends(count: usize, center: Point, radius: f64) -> Vec<Point> {
    ring(count, 100.0, center, radius)
}

/// Anchor of every label.
pub fn label_positions(count: usize, center: Point, radius: f64) -> Vec<Point> {
    ring(count, LABEL_LEVEL, center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn scores(values: &[f64]) -> Vec<DimensionScore> {
        values
            .iter()
            .map(|&value| DimensionScore { label: "x", value })
            .collect()
    }

    #[test]
    fn test_first_axis_points_up() {
        let p = point_at(0, 5, 100.0, Point::new(0.0, 0.0), 50.0);
        assert!(close(p, Point::new(0.0, -50.0)));
    }

    #[test]
    fn test_values_scale_radius() {
        let center = Point::new(100.0, 100.0);
        let points = radar_points(&scores(&[50.0, 100.0, 20.0, 20.0]), center, 80.0);
        assert!(close(points[0], Point::new(100.0, 60.0)));
        // second of four axes points right
        assert!(close(points[1], Point::new(180.0, 100.0)));
        assert!(close(points[2], Point::new(100.0, 116.0)));
    }

    #[test]
    fn test_labels_outside_outer_ring() {
        let center = Point::new(0.0, 0.0);
        let labels = label_positions(5, center, 100.0);
        let ends = axis_ends(5, center, 100.0);
        for (label, end) in labels.iter().zip(&ends) {
            let lr = (label.x.powi(2) + label.y.powi(2)).sqrt();
            let er = (end.x.powi(2) + end.y.powi(2)).sqrt();
            assert!((lr - 115.0).abs() < 1e-9);
            assert!((er - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ring_has_one_vertex_per_axis() {
        assert_eq!(ring(5, 60.0, Point::new(0.0, 0.0), 10.0).len(), 5);
    }
}
