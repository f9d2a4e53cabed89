use super::*;
use crate::animation::ease::CubicBezier;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn corner() -> Vec<Point> {
    pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
}

#[test]
fn corner_path_fires_three_pulses() {
    let s = compute_animation(&corner(), 2.0, true).unwrap();
    assert_eq!(s.total_length, 20.0);
    assert_eq!(s.animation_time, 2.0);

    let idx: Vec<usize> = s.pulses.iter().map(|p| p.index).collect();
    assert_eq!(idx, vec![0, 1, 2]);

    let table = EasingTable::css_ease();
    assert_eq!(s.pulses[0].delay_secs, 0.0);
    assert_eq!(s.pulses[1].progress, 0.5);
    assert_eq!(s.pulses[1].delay_secs, table.lookup(0.5) * 2.0);
    assert_eq!(s.pulses[2].progress, 1.0);
    assert_eq!(s.pulses[2].delay_secs, table.lookup(1.0) * 2.0);
    assert!(s.pulses[2].delay_secs > 1.8 && s.pulses[2].delay_secs <= 2.0);
}

#[test]
fn pulse_delays_follow_path_order() {
    let s = compute_animation(
        &pts(&[
            (100.0, 108.0),
            (150.0, 150.0),
            (300.0, 310.0),
            (600.0, 305.0),
            (620.0, 125.0),
        ]),
        2.0,
        true,
    )
    .unwrap();
    assert!(s.pulses.windows(2).all(|w| w[0].delay_secs <= w[1].delay_secs));
    assert!(s.pulses.iter().all(|p| p.end_secs == p.delay_secs + 0.5));
}

#[test]
fn disabled_pulses_yield_empty_schedule() {
    let s = compute_animation(&corner(), 2.0, false).unwrap();
    assert!(s.pulses.is_empty());
    assert_eq!(s.total_length, 20.0);
}

#[test]
fn empty_path_fails() {
    let err = compute_animation(&[], 2.0, true).unwrap_err();
    assert!(matches!(err, PathPulseError::InvalidPath(_)));
}

#[test]
fn degenerate_path_schedules_at_start() {
    let s = compute_animation(&pts(&[(5.0, 5.0), (5.0, 5.0)]), 2.0, true).unwrap();
    assert_eq!(s.total_length, 0.0);
    assert_eq!(s.pulses.len(), 2);
    for p in &s.pulses {
        assert_eq!(p.delay_secs, 0.0);
        assert_eq!(p.progress, 0.0);
    }
}

#[test]
fn single_point_pulses_once_at_start() {
    let s = compute_animation(&pts(&[(1.0, 2.0)]), 3.0, true).unwrap();
    assert_eq!(s.pulses.len(), 1);
    assert_eq!(s.pulses[0].delay_secs, 0.0);
}

#[test]
fn non_positive_time_is_instant() {
    for time in [0.0, -4.0] {
        let s = compute_animation(&corner(), time, true).unwrap();
        assert_eq!(s.animation_time, 0.0);
        assert!(s.pulses.iter().all(|p| p.delay_secs == 0.0));
        assert_eq!(s.revealed_fraction_at(0.0), 1.0);
        assert_eq!(s.dash_offset_at(0.0), 0.0);
    }
}

#[test]
fn non_finite_time_is_rejected() {
    let err = compute_animation(&corner(), f64::NAN, true).unwrap_err();
    assert!(matches!(err, PathPulseError::Validation(_)));
}

#[test]
fn negative_pulse_duration_is_rejected() {
    let mut opts = ScheduleOpts::new(2.0);
    opts.pulses.duration_secs = -0.1;
    let err = compute_animation_with(&corner(), &opts).unwrap_err();
    assert!(matches!(err, PathPulseError::Validation(_)));
}

#[test]
fn same_inputs_same_schedule() {
    let a = compute_animation(&corner(), 2.0, true).unwrap();
    let b = compute_animation(&corner(), 2.0, true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn pulses_fire_as_the_leading_edge_arrives() {
    let s = compute_animation(
        &pts(&[(0.0, 0.0), (30.0, 0.0), (30.0, 40.0), (90.0, 40.0), (90.0, 0.0)]),
        4.0,
        true,
    )
    .unwrap();
    for p in &s.pulses {
        let shown = s.revealed_fraction_at(p.delay_secs);
        // Quantization to 2 decimals bounds the mismatch by half a bucket.
        assert!(
            (shown - p.progress).abs() <= 0.0051,
            "pulse {} shown {shown} progress {}",
            p.index,
            p.progress
        );
    }
}

#[test]
fn custom_timing_builds_its_own_table() {
    let mut opts = ScheduleOpts::new(1.0);
    opts.timing = TimingFunction::Linear;
    let s = compute_animation_with(&corner(), &opts).unwrap();
    assert_eq!(s.timing, TimingFunction::Linear);
    // smallest linear t rounding to 0.50 is half a bucket early
    assert!((s.pulses[1].delay_secs - 0.495).abs() < 0.0015);

    opts.timing = TimingFunction::CubicBezier(CubicBezier::new(0.0, 1.0, 0.0, 1.0).unwrap());
    let s = compute_animation_with(&corner(), &opts).unwrap();
    assert_eq!(s.pulses.len(), 3);
}

#[test]
fn reveal_sampling_spans_the_path() {
    let s = compute_animation(&corner(), 2.0, true).unwrap();
    assert_eq!(s.dash_offset_at(0.0), 20.0);
    assert_eq!(s.dash_offset_at(2.0), 0.0);
    assert_eq!(s.revealed_length_at(5.0), 20.0);
    assert!(s.revealed_length_at(1.0) > 10.0);
}

#[test]
fn active_pulses_window() {
    let s = compute_animation(&corner(), 2.0, true).unwrap();
    let at_start: Vec<usize> = s.active_pulses_at(0.0).map(|p| p.index).collect();
    assert_eq!(at_start, vec![0]);
    assert_eq!(s.active_pulses_at(10.0).count(), 0);
}

#[test]
fn cached_analysis_gives_same_schedule() {
    let analyzed = analyze_path(&corner()).unwrap();
    let opts = ScheduleOpts::new(2.0);
    assert_eq!(
        schedule_analyzed(&analyzed, &opts).unwrap(),
        compute_animation_with(&corner(), &opts).unwrap()
    );
}
