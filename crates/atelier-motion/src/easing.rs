//! Easing functions for tween timing.
//!
//! CSS-compatible timing curves plus the overshooting `BackOut` ease used
//! by character entrances.
//!
//! # Usage
//!
//! ```
//! use atelier_motion::easing::Easing;
//!
//! let ease = Easing::EaseOut;
//! let progress = ease.evaluate(0.5); // eased progress at 50%
//!
//! let snappy = Easing::back_out(1.7);
//! assert!(snappy.evaluate(0.8) > 1.0); // overshoots before settling
//! ```

use serde::{Deserialize, Serialize};

/// Easing function mapping linear progress (0.0 to 1.0) to eased output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,

    /// CSS `ease` - slow start, fast middle, slow end.
    /// Equivalent to `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,

    /// CSS `ease-in` - slow start, accelerating.
    EaseIn,

    /// CSS `ease-out` - fast start, decelerating.
    EaseOut,

    /// CSS `ease-in-out` - slow start and end, fast middle.
    EaseInOut,

    /// Custom cubic bezier curve.
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// Decelerating ease that overshoots the end value before settling.
    /// `overshoot` controls the amplitude; 1.70158 matches the classic
    /// "back" curve at its default strength.
    BackOut { overshoot: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::Ease
    }
}

impl Easing {
    /// Evaluate the easing function at the given progress.
    ///
    /// Input is clamped to [0, 1]; output may exceed 1.0 for overshooting
    /// curves (`BackOut`, some beziers).
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
            Self::BackOut { overshoot } => back_out(*overshoot, t),
        }
    }

    /// Create a custom cubic bezier easing function.
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Create a back-out ease with the given overshoot amplitude.
    pub fn back_out(overshoot: f32) -> Self {
        Self::BackOut { overshoot }
    }
}

/// Evaluate a cubic bezier curve at time t.
///
/// Newton-Raphson iteration finds the curve parameter matching the input
/// progress on the x axis, then the y coordinate is evaluated there.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_axis(y1, y2, t)
}

/// Solve for t in the bezier x equation using Newton-Raphson iteration.
fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    let mut t = target_x;

    for _ in 0..8 {
        let x = bezier_axis(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// One-axis bezier evaluation: p(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³.
#[inline]
fn bezier_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

/// Derivative of x with respect to t.
#[inline]
fn bezier_x_derivative(x1: f32, x2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

/// Back-out ease: decelerates past 1.0 then settles back.
fn back_out(overshoot: f32, t: f32) -> f32 {
    let c1 = overshoot;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u * u * u + c1 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear() {
        let ease = Easing::Linear;
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));
    }

    #[test]
    fn test_ease_boundaries_and_monotonicity() {
        let ease = Easing::Ease;
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        let early = ease.evaluate(0.25);
        let mid = ease.evaluate(0.5);
        let late = ease.evaluate(0.75);
        assert!(early < mid && mid < late);
    }

    #[test]
    fn test_ease_out_decelerates() {
        let ease = Easing::EaseOut;
        assert!(ease.evaluate(0.25) > 0.25);
        assert!(ease.evaluate(0.5) > 0.5);
        assert!(approx_eq(ease.evaluate(1.0), 1.0));
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        let ease = Easing::EaseInOut;
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(0.25) + ease.evaluate(0.75), 1.0));
    }

    #[test]
    fn test_back_out_overshoots() {
        let ease = Easing::back_out(1.70158);
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Somewhere in the back half the curve exceeds 1.0.
        let overshot = (1..10).any(|i| ease.evaluate(0.5 + i as f32 * 0.05) > 1.0);
        assert!(overshot);
    }

    #[test]
    fn test_custom_bezier_linear_equivalent() {
        let linear_bezier = Easing::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        assert!(approx_eq(linear_bezier.evaluate(0.5), 0.5));
    }

    #[test]
    fn test_clamping() {
        let ease = Easing::Ease;
        assert!(approx_eq(ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(ease.evaluate(1.5), 1.0));
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn test_invalid_bezier_x() {
        Easing::cubic_bezier(-0.1, 0.0, 0.5, 1.0);
    }
}
