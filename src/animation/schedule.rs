use crate::{
    animation::{ease::TimingFunction, table::EasingTable},
    foundation::{
        core::{Point, ensure_finite_secs},
        error::{PathPulseError, PathPulseResult},
        math::{bucket_fraction, progress_bucket},
    },
    geometry::analyzer::{AnalyzedPath, analyze_path},
};

/// How long each pulse runs once it starts, in seconds.
pub const DEFAULT_PULSE_DURATION_SECS: f64 = 0.5;

/// Pulse settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PulseOpts {
    /// When false the schedule carries no pulses.
    pub enabled: bool,
    /// Length of each pulse effect.
    pub duration_secs: f64,
}

impl Default for PulseOpts {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: DEFAULT_PULSE_DURATION_SECS,
        }
    }
}

/// Inputs to [`compute_animation_with`] besides the path itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleOpts {
    /// Duration of the reveal animation, in seconds.
    pub animation_time: f64,
    /// Pulse settings.
    pub pulses: PulseOpts,
    /// Timing function of the reveal.
    pub timing: TimingFunction,
}

impl ScheduleOpts {
    /// CSS `ease` reveal over `animation_time` seconds with default pulses.
    pub fn new(animation_time: f64) -> Self {
        Self {
            animation_time,
            pulses: PulseOpts::default(),
            timing: TimingFunction::Ease,
        }
    }

    fn validate(&self) -> PathPulseResult<()> {
        ensure_finite_secs("animation_time", self.animation_time)?;
        ensure_finite_secs("pulse duration", self.pulses.duration_secs)?;
        if self.pulses.duration_secs < 0.0 {
            return Err(PathPulseError::validation("pulse duration must be >= 0"));
        }
        Ok(())
    }
}

/// A pulse effect anchored at one path vertex.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pulse {
    /// Index of the vertex in the input path.
    pub index: usize,
    /// Vertex position.
    pub point: Point,
    /// Arc-length fraction of the vertex, quantized to 2 decimals.
    pub progress: f64,
    /// Seconds after the reveal starts at which the pulse starts.
    pub delay_secs: f64,
    /// Seconds after the reveal starts at which the pulse ends.
    pub end_secs: f64,
}

/// Everything a renderer needs to drive the reveal and its pulses.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSchedule {
    /// Total arc length; the renderer's dash array and initial dash offset.
    pub total_length: f64,
    /// Reveal duration in seconds (0 for an instant schedule).
    pub animation_time: f64,
    /// Timing function of the reveal.
    pub timing: TimingFunction,
    /// Pulses in path order.
    pub pulses: Vec<Pulse>,
}

impl AnimationSchedule {
    /// Eased fraction of the path visible `secs` after the reveal starts.
    pub fn revealed_fraction_at(&self, secs: f64) -> f64 {
        if self.animation_time <= 0.0 {
            return 1.0;
        }
        self.timing.apply(secs / self.animation_time)
    }

    /// Visible arc length `secs` after the reveal starts.
    pub fn revealed_length_at(&self, secs: f64) -> f64 {
        self.total_length * self.revealed_fraction_at(secs)
    }

    /// Stroke dash offset at `secs`: `total_length` at the start, 0 once drawn.
    pub fn dash_offset_at(&self, secs: f64) -> f64 {
        self.total_length - self.revealed_length_at(secs)
    }

    /// Pulses running at `secs`.
    pub fn active_pulses_at(&self, secs: f64) -> impl Iterator<Item = &Pulse> + '_ {
        self.pulses
            .iter()
            .filter(move |p| p.delay_secs <= secs && secs < p.end_secs)
    }
}

/// Schedule a CSS `ease` reveal of `path` over `animation_time` seconds.
pub fn compute_animation(
    path: &[Point],
    animation_time: f64,
    pulses_enabled: bool,
) -> PathPulseResult<AnimationSchedule> {
    let opts = ScheduleOpts {
        pulses: PulseOpts {
            enabled: pulses_enabled,
            ..PulseOpts::default()
        },
        ..ScheduleOpts::new(animation_time)
    };
    compute_animation_with(path, &opts)
}

/// Analyze `path` and schedule its reveal and pulses.
#[tracing::instrument(skip(path), fields(len = path.len()))]
pub fn compute_animation_with(
    path: &[Point],
    opts: &ScheduleOpts,
) -> PathPulseResult<AnimationSchedule> {
    let analyzed = analyze_path(path)?;
    schedule_analyzed(&analyzed, opts)
}

/// Schedule an already analyzed path.
///
/// Callers that redraw often can keep the [`AnalyzedPath`] and only rerun this.
pub fn schedule_analyzed(
    analyzed: &AnalyzedPath,
    opts: &ScheduleOpts,
) -> PathPulseResult<AnimationSchedule> {
    opts.validate()?;

    let animation_time = if opts.animation_time > 0.0 {
        opts.animation_time
    } else {
        tracing::warn!(
            animation_time = opts.animation_time,
            "non-positive animation time, scheduling an instant reveal"
        );
        0.0
    };

    let mut schedule = AnimationSchedule {
        total_length: analyzed.total_length(),
        animation_time,
        timing: opts.timing,
        pulses: Vec::new(),
    };
    if !opts.pulses.enabled {
        return Ok(schedule);
    }

    if analyzed.is_degenerate() {
        tracing::debug!("zero-length path, every pulse fires at the start");
    }

    let built;
    let table = if opts.timing == TimingFunction::Ease {
        EasingTable::css_ease()
    } else {
        built = EasingTable::build(opts.timing);
        &built
    };

    for (index, p) in analyzed.pulse_vertices() {
        let bucket = progress_bucket(analyzed.progress_of(index).unwrap_or(0.0));
        let delay_secs = if analyzed.is_degenerate() {
            0.0
        } else {
            table.lookup_bucket(bucket) * animation_time
        };
        schedule.pulses.push(Pulse {
            index,
            point: p.position,
            progress: bucket_fraction(bucket),
            delay_secs,
            end_secs: delay_secs + opts.pulses.duration_secs,
        });
    }

    Ok(schedule)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
