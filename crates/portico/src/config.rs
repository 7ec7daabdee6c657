//! Screen configuration.
//!
//! A [`RevealConfig`] gathers everything the sign-in screen needs before it
//! mounts: animation timing, screen metrics and visual style. Every field has
//! a default, so a configuration file only lists what it overrides.
//!
//! # Example
//!
//! ```
//! use portico::config::RevealConfig;
//!
//! let config = RevealConfig::from_toml_str(r##"
//! [animation]
//! duration_ms = 450
//! easing = "ease-in-out-cubic"
//!
//! [screen]
//! width = 390
//! height = 844
//!
//! [style]
//! facebook_background = "#3B5998"
//! "##)?;
//!
//! assert_eq!(config.screen.height, 844.0);
//! assert_eq!(config.style.button_height, 70.0);
//! # Ok::<(), portico::Error>(())
//! ```

use std::path::Path;

use portico_core::logging::targets;
use portico_core::{Easing, TimingConfig};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Color, Size};

/// Top-level configuration for the sign-in screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub animation: AnimationConfig,
    pub screen: ScreenMetrics,
    pub style: ScreenStyle,
}

impl RevealConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every section, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.animation.timing()?;
        self.screen.validate()?;
        Ok(())
    }
}

/// Timing of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Length of one toggle run in milliseconds.
    pub duration_ms: f64,
    /// Curve shaping each run.
    pub easing: Easing,
    /// Progress at mount: 1 shows the sign-in buttons, 0 shows the form.
    pub initial_progress: f32,
}

impl AnimationConfig {
    /// Build the timing configuration for the driver.
    pub fn timing(&self) -> Result<TimingConfig> {
        if !(0.0..=1.0).contains(&self.initial_progress) {
            return Err(Error::InvalidProgress {
                value: self.initial_progress,
            });
        }
        Ok(TimingConfig::from_millis(self.duration_ms, self.easing)?)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600.0,
            easing: Easing::InOutEase,
            initial_progress: 1.0,
        }
    }
}

/// Logical size of the window the screen fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl ScreenMetrics {
    /// Create metrics, rejecting non-positive or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let metrics = Self { width, height };
        metrics.validate()?;
        Ok(metrics)
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidMetrics {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Height of the bottom area holding the buttons and the form.
    #[inline]
    pub fn control_area_height(&self) -> f32 {
        self.height / 3.0
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self {
            width: 375.0,
            height: 812.0,
        }
    }
}

/// Visual constants of the screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenStyle {
    /// Path of the background image asset.
    pub background_image: String,
    /// Extra height added below the screen for the background layer and clip.
    pub background_overscan: f32,
    /// Extra distance the background pans up beyond a third of the screen.
    pub background_pan_margin: f32,

    pub button_height: f32,
    pub button_margin_horizontal: f32,
    pub button_margin_vertical: f32,
    pub button_radius: f32,
    pub button_font_size: f32,
    pub button_background: Color,
    pub button_text: Color,
    pub facebook_background: Color,
    pub facebook_text: Color,
    /// How far the sign-in buttons drop while hiding.
    pub button_travel: f32,

    pub input_height: f32,
    pub input_radius: f32,
    pub input_border_width: f32,
    pub input_border_color: Color,
    pub input_padding_left: f32,
    pub placeholder_color: Color,
    /// How far the form drops while hiding.
    pub form_travel: f32,

    pub close_button_size: f32,
    /// Offset of the close button's top edge from the top of the form area.
    pub close_button_top: f32,
    pub close_font_size: f32,

    pub shadow_offset: [f32; 2],
    pub shadow_color: Color,
    pub shadow_opacity: f32,
}

impl Default for ScreenStyle {
    fn default() -> Self {
        Self {
            background_image: "assets/images/manas.jpeg".to_string(),
            background_overscan: 50.0,
            background_pan_margin: 50.0,

            button_height: 70.0,
            button_margin_horizontal: 20.0,
            button_margin_vertical: 5.0,
            button_radius: 35.0,
            button_font_size: 20.0,
            button_background: Color::WHITE,
            button_text: Color::BLACK,
            facebook_background: Color::from_rgba8(0x2E, 0x71, 0xDC, 0xFF),
            facebook_text: Color::WHITE,
            button_travel: 100.0,

            input_height: 50.0,
            input_radius: 25.0,
            input_border_width: 0.5,
            input_border_color: Color::from_rgba8(0, 0, 0, 51),
            input_padding_left: 10.0,
            placeholder_color: Color::BLACK,
            form_travel: 100.0,

            close_button_size: 40.0,
            close_button_top: -20.0,
            close_font_size: 15.0,

            shadow_offset: [2.0, 2.0],
            shadow_color: Color::BLACK,
            shadow_opacity: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = RevealConfig::default();
        config.validate().unwrap();
        let timing = config.animation.timing().unwrap();
        assert_eq!(timing.duration, std::time::Duration::from_millis(600));
        assert_eq!(timing.easing, Easing::InOutEase);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RevealConfig::from_toml_str("").unwrap(), RevealConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = RevealConfig::from_toml_str(
            r#"
            [animation]
            easing = { cubic-bezier = [0.25, 0.1, 0.25, 1.0] }

            [style]
            button_height = 60
            "#,
        )
        .unwrap();
        assert!(matches!(config.animation.easing, Easing::CubicBezier(_)));
        assert_eq!(config.animation.duration_ms, 600.0);
        assert_eq!(config.style.button_height, 60.0);
        assert_eq!(config.style.input_height, 50.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_metrics = RevealConfig::from_toml_str("[screen]\nwidth = 0\n");
        assert!(matches!(bad_metrics, Err(Error::InvalidMetrics { .. })));

        let bad_duration = RevealConfig::from_toml_str("[animation]\nduration_ms = -5\n");
        assert!(matches!(bad_duration, Err(Error::Animation(_))));

        let bad_progress = RevealConfig::from_toml_str("[animation]\ninitial_progress = 2.0\n");
        assert!(matches!(bad_progress, Err(Error::InvalidProgress { .. })));

        let bad_color = RevealConfig::from_toml_str("[style]\nbutton_text = \"blue\"\n");
        assert!(matches!(bad_color, Err(Error::Config(_))));

        let bad_curve =
            RevealConfig::from_toml_str("[animation]\neasing = { cubic-bezier = [2, 0, 1, 1] }\n");
        assert!(matches!(bad_curve, Err(Error::Config(_))));

        let unknown = RevealConfig::from_toml_str("[screen]\ndepth = 3\n");
        assert!(matches!(unknown, Err(Error::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RevealConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(RevealConfig::from_toml_str(&text).unwrap(), config);
    }
}
