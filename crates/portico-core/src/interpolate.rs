//! Piecewise-linear interpolation between value ranges.
//!
//! An [`Interpolation`] maps an input value (usually an animation progress)
//! onto an output range through a list of control points. Each consecutive
//! pair of control points forms a linear segment:
//!
//! ```text
//! out = out0 + (in - in0) * (out1 - out0) / (in1 - in0)
//! ```
//!
//! Inputs outside the first or last control point are handled by the
//! [`Extrapolate`] mode configured for that side.
//!
//! # Example
//!
//! ```
//! use portico_core::interpolate::{Extrapolate, Interpolation};
//!
//! let offset = Interpolation::new([0.0, 1.0], [100.0, 0.0], Extrapolate::Clamp)?;
//! assert_eq!(offset.eval(0.0), 100.0);
//! assert_eq!(offset.eval(0.25), 75.0);
//! assert_eq!(offset.eval(2.0), 0.0);
//! # Ok::<(), portico_core::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How to treat inputs that fall outside the input range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extrapolate {
    /// Hold the nearest endpoint's output.
    #[default]
    Clamp,
    /// Continue the outermost segment's slope.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// A validated piecewise-linear mapping.
///
/// Construction rejects malformed ranges so that evaluation never divides by
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: Vec<f32>,
    output: Vec<f32>,
    extrapolate_left: Extrapolate,
    extrapolate_right: Extrapolate,
}

impl Interpolation {
    /// Create an interpolation using the same extrapolation on both sides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when the ranges have different
    /// lengths, fewer than two points, non-finite values, or an input range
    /// that is not strictly increasing (which includes `in0 == in1`).
    pub fn new(
        input: impl Into<Vec<f32>>,
        output: impl Into<Vec<f32>>,
        extrapolate: Extrapolate,
    ) -> Result<Self> {
        let input = input.into();
        let output = output.into();

        if input.len() != output.len() {
            return Err(Error::invalid_range(format!(
                "input has {} points but output has {}",
                input.len(),
                output.len()
            )));
        }
        if input.len() < 2 {
            return Err(Error::invalid_range("at least two control points are required"));
        }
        if let Some(bad) = input.iter().chain(output.iter()).find(|v| !v.is_finite()) {
            return Err(Error::invalid_range(format!("non-finite control point {bad}")));
        }
        if let Some(pair) = input.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(Error::invalid_range(format!(
                "input range must be strictly increasing, found {} followed by {}",
                pair[0], pair[1]
            )));
        }

        Ok(Self {
            input,
            output,
            extrapolate_left: extrapolate,
            extrapolate_right: extrapolate,
        })
    }

    /// Use a different extrapolation mode on each side.
    pub fn with_extrapolation(mut self, left: Extrapolate, right: Extrapolate) -> Self {
        self.extrapolate_left = left;
        self.extrapolate_right = right;
        self
    }

    /// The input control points.
    #[inline]
    pub fn input_range(&self) -> &[f32] {
        &self.input
    }

    /// The output control points.
    #[inline]
    pub fn output_range(&self) -> &[f32] {
        &self.output
    }

    /// Extrapolation modes as `(left, right)`.
    #[inline]
    pub fn extrapolation(&self) -> (Extrapolate, Extrapolate) {
        (self.extrapolate_left, self.extrapolate_right)
    }

    /// Map an input value onto the output range.
    ///
    /// A NaN input evaluates to NaN.
    pub fn eval(&self, value: f32) -> f32 {
        let last = self.input.len() - 1;

        if value < self.input[0] {
            return match self.extrapolate_left {
                Extrapolate::Clamp => self.output[0],
                Extrapolate::Extend => self.segment(0, value),
                Extrapolate::Identity => value,
            };
        }
        if value > self.input[last] {
            return match self.extrapolate_right {
                Extrapolate::Clamp => self.output[last],
                Extrapolate::Extend => self.segment(last - 1, value),
                Extrapolate::Identity => value,
            };
        }

        // Exact hits on control points return the declared output unchanged.
        if let Some(index) = self.input.iter().position(|&x| x == value) {
            return self.output[index];
        }

        let index = self
            .input
            .windows(2)
            .position(|pair| value < pair[1])
            .unwrap_or(last - 1);
        self.segment(index, value)
    }

    /// Evaluate the linear segment starting at control point `index`.
    #[inline]
    fn segment(&self, index: usize, value: f32) -> f32 {
        let (in0, in1) = (self.input[index], self.input[index + 1]);
        let (out0, out1) = (self.output[index], self.output[index + 1]);
        out0 + (value - in0) * (out1 - out0) / (in1 - in0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_endpoints_exact() {
        let rotation = Interpolation::new([0.0, 1.0], [180.0, 360.0], Extrapolate::Clamp).unwrap();
        assert_eq!(rotation.eval(0.0), 180.0);
        assert_eq!(rotation.eval(1.0), 360.0);
        assert_eq!(rotation.eval(0.5), 270.0);
    }

    #[test]
    fn test_clamp_holds_endpoints() {
        let opacity = Interpolation::new([0.0, 1.0], [1.0, 0.0], Extrapolate::Clamp).unwrap();
        assert_eq!(opacity.eval(-3.0), 1.0);
        assert_eq!(opacity.eval(7.0), 0.0);
    }

    #[test]
    fn test_extend_continues_slope() {
        let offset = Interpolation::new([0.0, 1.0], [0.0, 100.0], Extrapolate::Extend).unwrap();
        assert_eq!(offset.eval(2.0), 200.0);
        assert_eq!(offset.eval(-0.5), -50.0);
    }

    #[test]
    fn test_identity_passes_input_through() {
        let mapping = Interpolation::new([0.0, 1.0], [10.0, 20.0], Extrapolate::Clamp)
            .unwrap()
            .with_extrapolation(Extrapolate::Identity, Extrapolate::Clamp);
        assert_eq!(mapping.eval(-4.0), -4.0);
        assert_eq!(mapping.eval(4.0), 20.0);
        assert_eq!(
            mapping.extrapolation(),
            (Extrapolate::Identity, Extrapolate::Clamp)
        );
    }

    #[test]
    fn test_multi_segment() {
        let mapping =
            Interpolation::new([0.0, 0.5, 1.0], [0.0, 10.0, 0.0], Extrapolate::Clamp).unwrap();
        assert_eq!(mapping.eval(0.25), 5.0);
        assert_eq!(mapping.eval(0.5), 10.0);
        assert_eq!(mapping.eval(0.75), 5.0);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        let err = Interpolation::new([1.0, 1.0], [0.0, 1.0], Extrapolate::Clamp).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
        assert!(Interpolation::new([1.0, 0.0], [0.0, 1.0], Extrapolate::Clamp).is_err());
    }

    #[test]
    fn test_rejects_mismatched_or_short_ranges() {
        assert!(Interpolation::new([0.0, 1.0], [0.0], Extrapolate::Clamp).is_err());
        assert!(Interpolation::new([0.0], [0.0], Extrapolate::Clamp).is_err());
        assert!(Interpolation::new(Vec::<f32>::new(), Vec::<f32>::new(), Extrapolate::Clamp).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Interpolation::new([0.0, f32::INFINITY], [0.0, 1.0], Extrapolate::Clamp).is_err());
        assert!(Interpolation::new([0.0, 1.0], [f32::NAN, 1.0], Extrapolate::Clamp).is_err());
    }
}
