//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cubic Bézier timing curve anchored at (0, 0) and (1, 1).
///
/// The two free control points follow the CSS `cubic-bezier()` convention.
/// Their x coordinates must stay within [0, 1] so the curve is a function of
/// time; the y coordinates are unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 4]", into = "[f32; 4]")]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// The standard "ease" curve, `cubic-bezier(0.42, 0, 1, 1)`.
    pub const EASE: Self = Self {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    /// Create a curve from its two control points.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(Error::invalid_easing("control points must be finite"));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(Error::invalid_easing(format!(
                "control point x coordinates must lie in [0, 1], got {x1} and {x2}"
            )));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// The control points as `[x1, y1, x2, y2]`.
    pub fn control_points(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Evaluate the curve's y for the given x (time) in [0, 1].
    pub fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.parameter_for_x(x);
        bezier_component(self.y1, self.y2, t)
    }

    /// Find the curve parameter whose x coordinate equals `x`.
    ///
    /// Newton-Raphson first, bisection when the slope is too flat.
    fn parameter_for_x(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-6;

        let mut t = x;
        for _ in 0..8 {
            let error = bezier_component(self.x1, self.x2, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = bezier_slope(self.x1, self.x2, t);
            if slope.abs() < EPSILON {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = bezier_component(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

impl TryFrom<[f32; 4]> for CubicBezier {
    type Error = Error;

    fn try_from([x1, y1, x2, y2]: [f32; 4]) -> Result<Self> {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<CubicBezier> for [f32; 4] {
    fn from(curve: CubicBezier) -> Self {
        curve.control_points()
    }
}

/// One coordinate of a Bézier with endpoints 0 and 1.
#[inline]
fn bezier_component(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    EaseInCubic,
    /// Cubic ease-out (more pronounced than quadratic).
    EaseOutCubic,
    /// Cubic ease-in-out (more pronounced than quadratic).
    EaseInOutCubic,
    /// Sinusoidal ease-in.
    EaseInSine,
    /// Sinusoidal ease-out.
    EaseOutSine,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
    /// The standard "ease" curve, `cubic-bezier(0.42, 0, 1, 1)`.
    Ease,
    /// The "ease" curve mirrored into a symmetric in-out shape.
    ///
    /// This is the curve the sign-in reveal uses.
    InOutEase,
    /// An arbitrary cubic Bézier curve.
    CubicBezier(CubicBezier),
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Returns
///
/// The eased value, typically in the range 0.0 to 1.0. Every curve maps 0 to
/// 0 and 1 to 1 exactly.
///
/// # Example
///
/// ```
/// use portico_core::easing::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
///
/// // In-out curves are symmetric around the midpoint
/// assert!((ease(Easing::InOutEase, 0.5) - 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => ease_in_quad(t),
        Easing::EaseOut => ease_out_quad(t),
        Easing::EaseInOut => ease_in_out_quad(t),
        Easing::EaseInCubic => ease_in_cubic(t),
        Easing::EaseOutCubic => ease_out_cubic(t),
        Easing::EaseInOutCubic => ease_in_out_cubic(t),
        Easing::EaseInSine => ease_in_sine(t),
        Easing::EaseOutSine => ease_out_sine(t),
        Easing::EaseInOutSine => ease_in_out_sine(t),
        Easing::Ease => CubicBezier::EASE.solve(t),
        Easing::InOutEase => in_out(t, |x| CubicBezier::EASE.solve(x)),
        Easing::CubicBezier(curve) => curve.solve(t),
    }
}

/// Interpolate between two values using an easing function.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `start` - Starting value
/// * `end` - Ending value
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Returns
///
/// The interpolated value between `start` and `end`.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}

/// Mirror an ease-in curve into an in-out curve.
#[inline]
fn in_out(t: f32, curve: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        curve(t * 2.0) / 2.0
    } else {
        1.0 - curve((1.0 - t) * 2.0) / 2.0
    }
}

// =============================================================================
// Quadratic Easing
// =============================================================================

#[inline]
fn ease_in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// =============================================================================
// Cubic Easing
// =============================================================================

#[inline]
fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[inline]
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

// =============================================================================
// Sinusoidal Easing
// =============================================================================

#[inline]
fn ease_in_sine(t: f32) -> f32 {
    1.0 - ((t * PI) / 2.0).cos()
}

#[inline]
fn ease_out_sine(t: f32) -> f32 {
    ((t * PI) / 2.0).sin()
}

#[inline]
fn ease_in_out_sine(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}
