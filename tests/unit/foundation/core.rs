use super::*;

#[test]
fn finite_points_pass() {
    ensure_finite_point(0, Point::new(-3.0, 1e9)).unwrap();
}

#[test]
fn nan_point_is_invalid_path() {
    let err = ensure_finite_point(4, Point::new(f64::NAN, 0.0)).unwrap_err();
    assert!(matches!(err, PathPulseError::InvalidPath(_)));
    assert!(err.to_string().contains("point 4"));
}

#[test]
fn infinite_secs_are_rejected() {
    let err = ensure_finite_secs("animation_time", f64::INFINITY).unwrap_err();
    assert!(matches!(err, PathPulseError::Validation(_)));
    ensure_finite_secs("animation_time", -2.0).unwrap();
}
