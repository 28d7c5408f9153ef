//! Test support library
//! Provides various helper functions & utilities for tests.

use nalgebra::Point2;
use quadgrid::float_types::Real;
use quadgrid::polygon::Polygon;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a Polygon from `[x, y]` rows.
pub fn make_polygon(points: &[[Real; 2]]) -> Polygon {
    Polygon::new(points.iter().map(|p| Point2::new(p[0], p[1])).collect())
}

/// The unit-ish square used throughout the classification tests: corners at
/// `(±0.5, ±0.5)`, wound counter-clockwise.
pub fn half_square() -> Polygon {
    make_polygon(&[[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]])
}
