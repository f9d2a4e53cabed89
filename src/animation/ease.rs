use kurbo::{CubicBez, ParamCurve, ParamCurveDeriv};

use crate::foundation::{
    error::{PathPulseError, PathPulseResult},
    math::clamp01,
};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;
const SOLVE_EPSILON: f64 = 1e-9;

/// CSS-style cubic Bézier timing curve with endpoints fixed at (0,0) and (1,1).
///
/// Serialized as `[x1, y1, x2, y2]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// CSS `ease`.
    pub const EASE: Self = Self::new_unchecked(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::new_unchecked(0.42, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::new_unchecked(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::new_unchecked(0.42, 0.0, 0.58, 1.0);
    /// CSS `linear`.
    pub const LINEAR: Self = Self::new_unchecked(0.0, 0.0, 1.0, 1.0);

    const fn new_unchecked(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a curve from its two inner control points.
    ///
    /// `x1` and `x2` must lie in `[0, 1]` so that time stays monotonic; `y1` and `y2`
    /// may overshoot.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> PathPulseResult<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(PathPulseError::timing(
                "cubic-bezier control points must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(PathPulseError::timing(format!(
                "cubic-bezier x coordinates must be within [0, 1], got x1={x1} x2={x2}"
            )));
        }
        Ok(Self::new_unchecked(x1, y1, x2, y2))
    }

    /// Control values as `[x1, y1, x2, y2]`.
    pub fn control_points(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    fn curve(self) -> CubicBez {
        CubicBez::new(
            (0.0, 0.0),
            (self.x1, self.y1),
            (self.x2, self.y2),
            (1.0, 1.0),
        )
    }

    /// Eased output for elapsed-time fraction `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp01(t);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let curve = self.curve();
        let s = solve_param_for_x(&curve, t);
        curve.eval(s).y
    }
}

impl TryFrom<[f64; 4]> for CubicBezier {
    type Error = PathPulseError;

    fn try_from(v: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(c: CubicBezier) -> Self {
        c.control_points()
    }
}

// Newton first, bisection when the slope flattens or the step leaves [0, 1].
fn solve_param_for_x(curve: &CubicBez, x: f64) -> f64 {
    let deriv = curve.deriv();

    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = curve.eval(s).x - x;
        if err.abs() < SOLVE_EPSILON {
            return s;
        }
        let dx = deriv.eval(s).x;
        if dx.abs() < 1e-6 {
            break;
        }
        let next = s - err / dx;
        if !(0.0..=1.0).contains(&next) {
            break;
        }
        s = next;
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let cur = curve.eval(s).x;
        if (cur - x).abs() < SOLVE_EPSILON {
            return s;
        }
        if cur < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

/// Timing function shared by the reveal animation and the pulse scheduler.
///
/// Keyword variants follow the CSS `<easing-function>` names.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    /// Identity mapping.
    Linear,
    /// `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    #[default]
    Ease,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Arbitrary control points.
    CubicBezier(CubicBezier),
}

impl TimingFunction {
    /// The equivalent cubic Bézier curve.
    pub fn as_cubic_bezier(self) -> CubicBezier {
        match self {
            Self::Linear => CubicBezier::LINEAR,
            Self::Ease => CubicBezier::EASE,
            Self::EaseIn => CubicBezier::EASE_IN,
            Self::EaseOut => CubicBezier::EASE_OUT,
            Self::EaseInOut => CubicBezier::EASE_IN_OUT,
            Self::CubicBezier(c) => c,
        }
    }

    /// Map elapsed-time fraction `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => clamp01(t),
            other => other.as_cubic_bezier().apply(t),
        }
    }

    /// CSS text for this timing function, for the renderer's reveal animation.
    pub fn to_css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::Ease => "ease".to_string(),
            Self::EaseIn => "ease-in".to_string(),
            Self::EaseOut => "ease-out".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::CubicBezier(c) => {
                let [x1, y1, x2, y2] = c.control_points();
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
