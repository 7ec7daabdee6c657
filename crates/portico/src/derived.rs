//! Visual values derived from the reveal progress.
//!
//! Every animated property of the screen is a pure function of one progress
//! value. [`RevealInterpolations`] holds those functions and
//! [`RevealInterpolations::derive`] evaluates them all at once into a
//! [`DerivedValues`] snapshot that the layout reads.

use portico_core::{Extrapolate, Interpolation};

use crate::config::{ScreenMetrics, ScreenStyle};
use crate::error::Result;

/// A snapshot of every animated property for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedValues {
    /// The progress the snapshot was taken at.
    pub progress: f32,
    /// Opacity of the two sign-in buttons.
    pub button_opacity: f32,
    /// Vertical offset of the sign-in buttons.
    pub button_y: f32,
    /// Vertical offset of the background layer.
    pub background_y: f32,
    /// Z-order of the form relative to the buttons.
    pub form_z_index: f32,
    /// Vertical offset of the form.
    pub form_y: f32,
    pub form_opacity: f32,
    /// Rotation of the close glyph, in degrees.
    pub close_icon_rotation: f32,
}

/// The six progress mappings of the sign-in screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealInterpolations {
    button_y: Interpolation,
    background_y: Interpolation,
    form_z_index: Interpolation,
    form_y: Interpolation,
    form_opacity: Interpolation,
    close_icon_rotation: Interpolation,
}

impl RevealInterpolations {
    /// Build the mappings for the given screen size and style.
    ///
    /// The background pans by a third of the screen height plus
    /// `style.background_pan_margin`, so the mappings must be rebuilt when
    /// the screen is resized.
    pub fn new(metrics: &ScreenMetrics, style: &ScreenStyle) -> Result<Self> {
        metrics.validate()?;
        let unit = |output: [f32; 2]| Interpolation::new([0.0, 1.0], output, Extrapolate::Clamp);

        Ok(Self {
            button_y: unit([style.button_travel, 0.0])?,
            background_y: unit([
                -metrics.control_area_height() - style.background_pan_margin,
                0.0,
            ])?,
            form_z_index: unit([1.0, -1.0])?,
            form_y: unit([0.0, style.form_travel])?,
            form_opacity: unit([1.0, 0.0])?,
            close_icon_rotation: unit([180.0, 360.0])?,
        })
    }

    pub fn button_y(&self) -> &Interpolation {
        &self.button_y
    }

    pub fn background_y(&self) -> &Interpolation {
        &self.background_y
    }

    pub fn form_z_index(&self) -> &Interpolation {
        &self.form_z_index
    }

    pub fn form_y(&self) -> &Interpolation {
        &self.form_y
    }

    pub fn form_opacity(&self) -> &Interpolation {
        &self.form_opacity
    }

    pub fn close_icon_rotation(&self) -> &Interpolation {
        &self.close_icon_rotation
    }

    /// Evaluate every mapping at `progress`.
    ///
    /// The progress is clamped to [0, 1] before lookup.
    pub fn derive(&self, progress: f32) -> DerivedValues {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        DerivedValues {
            progress: p,
            button_opacity: p,
            button_y: self.button_y.eval(p),
            background_y: self.background_y.eval(p),
            form_z_index: self.form_z_index.eval(p),
            form_y: self.form_y.eval(p),
            form_opacity: self.form_opacity.eval(p),
            close_icon_rotation: self.close_icon_rotation.eval(p),
        }
    }
}
