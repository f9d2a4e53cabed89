//! Point-level helpers used by the path analyzer.

use crate::foundation::core::Point;

/// Divisor applied to the squared longest side when deriving the corner tolerance.
pub const CURVE_TOLERANCE_DIVISOR: f64 = 500.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Signed area of the triangle `(a, b, c)` (halved shoelace formula).
///
/// Positive for counter-clockwise winding in a y-up frame.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a) / 2.0
}

/// Whether `point` is a directional change between `prev` and `next`.
///
/// This is a corner heuristic rather than a curvature measure: the triangle area is
/// compared to `longest_side² / 500`, which keeps the test independent of scale and
/// position. Nearly straight runs fall below the tolerance and are not corners.
pub fn is_curve(prev: Point, point: Point, next: Point) -> bool {
    let area = triangle_area(prev, point, next);

    let longest = distance(prev, point)
        .max(distance(prev, next))
        .max(distance(point, next));
    let tol = longest * longest / CURVE_TOLERANCE_DIVISOR;

    area.abs() >= tol
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
