use crate::{
    animation::{
        ease::TimingFunction,
        schedule::{AnimationSchedule, PulseOpts, ScheduleOpts, compute_animation_with},
    },
    foundation::{
        core::{Point, ensure_finite_point, ensure_finite_secs},
        error::{PathPulseError, PathPulseResult},
    },
};

/// Declarative description of one animated path, as loaded from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatedPath {
    /// Vertices in draw order.
    pub points: Vec<Point>,
    /// Reveal duration in seconds.
    pub animation_time: f64,
    /// Pulse settings; pulses are on by default.
    #[serde(default)]
    pub pulses: PulseOpts,
    /// Reveal timing; CSS `ease` by default.
    #[serde(default)]
    pub timing: TimingFunction,
}

impl AnimatedPath {
    /// Check the document before scheduling it.
    pub fn validate(&self) -> PathPulseResult<()> {
        if self.points.is_empty() {
            return Err(PathPulseError::invalid_path(
                "path must contain at least one point",
            ));
        }
        for (i, &p) in self.points.iter().enumerate() {
            ensure_finite_point(i, p)?;
        }

        ensure_finite_secs("animation_time", self.animation_time)?;
        if self.animation_time < 0.0 {
            return Err(PathPulseError::validation("animation_time must be >= 0"));
        }
        ensure_finite_secs("pulse duration", self.pulses.duration_secs)?;
        if self.pulses.duration_secs < 0.0 {
            return Err(PathPulseError::validation("pulse duration must be >= 0"));
        }
        Ok(())
    }

    /// Options passed to the scheduler.
    pub fn schedule_opts(&self) -> ScheduleOpts {
        ScheduleOpts {
            animation_time: self.animation_time,
            pulses: self.pulses,
            timing: self.timing,
        }
    }

    /// Validate and compute the reveal/pulse schedule.
    pub fn schedule(&self) -> PathPulseResult<AnimationSchedule> {
        self.validate()?;
        compute_animation_with(&self.points, &self.schedule_opts())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(s: &str) -> PathPulseResult<Self> {
        let doc: Self = serde_json::from_str(s)?;
        doc.validate()?;
        Ok(doc)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
