//! pathpulse computes the timing of a path-drawing animation.
//!
//! A polyline is revealed progressively over a fixed duration with a cubic-Bézier timing
//! curve, and a pulse effect fires at each corner (and at both ends) exactly when the
//! leading edge of the reveal reaches it. This crate draws nothing: it turns a path and a
//! duration into numbers (arc lengths, corner flags, pulse delays) that a renderer feeds to
//! its own timed animations.
//!
//! # Pipeline overview
//!
//! 1. **Analyze**: `&[Point] -> AnalyzedPath` (cumulative arc length, corner classification)
//! 2. **Invert easing**: `TimingFunction -> EasingTable` (eased progress -> elapsed time)
//! 3. **Schedule**: `AnalyzedPath + EasingTable + duration -> AnimationSchedule`
//!
//! The renderer must animate the reveal with the same [`TimingFunction`] the schedule was
//! built with ([`TimingFunction::to_css`] gives the CSS text); otherwise pulses drift away
//! from the leading edge.
//!
//! Everything is pure and deterministic. The only shared state is the CSS `ease` table,
//! built once per process and read-only afterwards.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod geometry;
mod scene;

pub use animation::ease::{CubicBezier, TimingFunction};
pub use animation::schedule::{
    AnimationSchedule, DEFAULT_PULSE_DURATION_SECS, Pulse, PulseOpts, ScheduleOpts,
    compute_animation, compute_animation_with, schedule_analyzed,
};
pub use animation::table::{EasingTable, TABLE_SAMPLES};
pub use foundation::core::{BezPath, Point, Vec2};
pub use foundation::error::{PathPulseError, PathPulseResult};
pub use foundation::math::PROGRESS_BUCKETS;
pub use geometry::analyzer::{AnalyzedPath, PathPoint, analyze_path};
pub use geometry::primitives::{CURVE_TOLERANCE_DIVISOR, distance, is_curve, triangle_area};
pub use scene::dsl::AnimatedPathBuilder;
pub use scene::model::AnimatedPath;
