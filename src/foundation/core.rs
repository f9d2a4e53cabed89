use crate::foundation::error::{PathPulseError, PathPulseResult};

pub use kurbo::{BezPath, Point, Vec2};

pub(crate) fn ensure_finite_point(index: usize, p: Point) -> PathPulseResult<()> {
    if !p.is_finite() {
        return Err(PathPulseError::invalid_path(format!(
            "point {index} has non-finite coordinates ({}, {})",
            p.x, p.y
        )));
    }
    Ok(())
}

pub(crate) fn ensure_finite_secs(what: &str, secs: f64) -> PathPulseResult<()> {
    if !secs.is_finite() {
        return Err(PathPulseError::validation(format!(
            "{what} must be finite, got {secs}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
