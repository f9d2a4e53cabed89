use crate::{
    foundation::{
        core::{BezPath, Point, ensure_finite_point},
        error::{PathPulseError, PathPulseResult},
    },
    geometry::primitives::{distance, is_curve},
};

/// One analyzed vertex of a path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathPoint {
    /// Input position.
    pub position: Point,
    /// Arc length from the first point up to this one.
    pub cumulative_length: f64,
    /// Whether a pulse fires here (endpoints and corners).
    pub is_pulse_vertex: bool,
}

/// Result of a single walk over a path: per-point arc length and corner flags.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalyzedPath {
    points: Vec<PathPoint>,
    total_length: f64,
}

impl AnalyzedPath {
    /// Analyzed points, in input order.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Cumulative length at the last point.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// `true` when the path has zero length (single point or all points coincident).
    pub fn is_degenerate(&self) -> bool {
        self.total_length <= 0.0
    }

    /// Indices and points that carry a pulse.
    pub fn pulse_vertices(&self) -> impl Iterator<Item = (usize, &PathPoint)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_pulse_vertex)
    }

    /// Fraction of the total length reached at `index`; 0 on a degenerate path.
    pub fn progress_of(&self, index: usize) -> Option<f64> {
        let p = self.points.get(index)?;
        if self.is_degenerate() {
            return Some(0.0);
        }
        Some(p.cumulative_length / self.total_length)
    }

    /// Polyline through every point, in draw order.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            path.move_to(first.position);
        }
        for p in iter {
            path.line_to(p.position);
        }
        path
    }
}

/// Walk `points` once, accumulating arc length and classifying pulse vertices.
///
/// The first and last points always pulse; interior points pulse when
/// [`is_curve`] reports a corner against their immediate neighbours.
#[tracing::instrument(skip(points), fields(len = points.len()))]
pub fn analyze_path(points: &[Point]) -> PathPulseResult<AnalyzedPath> {
    if points.is_empty() {
        return Err(PathPulseError::invalid_path(
            "path must contain at least one point",
        ));
    }
    for (i, &p) in points.iter().enumerate() {
        ensure_finite_point(i, p)?;
    }

    let last = points.len() - 1;
    let mut out = Vec::with_capacity(points.len());
    let mut total_length = 0.0;

    for (i, &position) in points.iter().enumerate() {
        if i > 0 {
            total_length += distance(points[i - 1], position);
        }
        let is_pulse_vertex =
            i == 0 || i == last || is_curve(points[i - 1], position, points[i + 1]);
        out.push(PathPoint {
            position,
            cumulative_length: total_length,
            is_pulse_vertex,
        });
    }

    if !total_length.is_finite() {
        return Err(PathPulseError::invalid_path(format!(
            "path length overflows to {total_length}"
        )));
    }

    Ok(AnalyzedPath {
        points: out,
        total_length,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/analyzer.rs"]
mod tests;
