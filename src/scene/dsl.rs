use crate::{
    animation::{
        ease::TimingFunction,
        schedule::{DEFAULT_PULSE_DURATION_SECS, PulseOpts},
    },
    foundation::{core::Point, error::PathPulseResult},
    scene::model::AnimatedPath,
};

/// Fluent constructor for [`AnimatedPath`].
pub struct AnimatedPathBuilder {
    points: Vec<Point>,
    animation_time: f64,
    pulses: bool,
    pulse_duration_secs: f64,
    timing: TimingFunction,
}

impl AnimatedPathBuilder {
    /// Start a path revealed over `animation_time` seconds.
    pub fn new(animation_time: f64) -> Self {
        Self {
            points: Vec::new(),
            animation_time,
            pulses: true,
            pulse_duration_secs: DEFAULT_PULSE_DURATION_SECS,
            timing: TimingFunction::Ease,
        }
    }

    /// Set the reveal duration in seconds.
    pub fn animation_time(mut self, secs: f64) -> Self {
        self.animation_time = secs;
        self
    }

    /// Append one vertex.
    pub fn point(mut self, x: f64, y: f64) -> Self {
        self.points.push(Point::new(x, y));
        self
    }

    /// Append vertices in order.
    pub fn points(mut self, pts: impl IntoIterator<Item = Point>) -> Self {
        self.points.extend(pts);
        self
    }

    /// Turn vertex pulses on or off.
    pub fn pulses(mut self, enabled: bool) -> Self {
        self.pulses = enabled;
        self
    }

    /// Set how long each pulse runs.
    pub fn pulse_duration(mut self, secs: f64) -> Self {
        self.pulse_duration_secs = secs;
        self
    }

    /// Set the reveal timing function.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Finish and validate.
    pub fn build(self) -> PathPulseResult<AnimatedPath> {
        let doc = AnimatedPath {
            points: self.points,
            animation_time: self.animation_time,
            pulses: PulseOpts {
                enabled: self.pulses,
                duration_secs: self.pulse_duration_secs,
            },
            timing: self.timing,
        };
        doc.validate()?;
        Ok(doc)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
