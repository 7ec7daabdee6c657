//! Error types for Portico animation primitives.

/// Result type alias for animation configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring animations.
///
/// Every variant is a configuration-time failure. Once an interpolation,
/// easing curve or timing configuration has been built, evaluating it per
/// frame cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An interpolation was given an unusable input/output range.
    #[error("Invalid interpolation range: {message}")]
    InvalidRange { message: String },

    /// A toggle endpoint other than 0 or 1 was requested.
    #[error("Invalid toggle target {value}: expected 0 or 1")]
    InvalidTarget { value: f32 },

    /// A duration was negative or not finite.
    #[error("Invalid duration {millis}ms: {message}")]
    InvalidDuration { millis: f64, message: String },

    /// Cubic Bézier control points outside the allowed domain.
    #[error("Invalid easing curve: {message}")]
    InvalidEasing { message: String },
}

impl Error {
    /// Create a range error.
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }

    /// Create a duration error.
    pub fn invalid_duration(millis: f64, message: impl Into<String>) -> Self {
        Self::InvalidDuration {
            millis,
            message: message.into(),
        }
    }

    /// Create an easing error.
    pub fn invalid_easing(message: impl Into<String>) -> Self {
        Self::InvalidEasing {
            message: message.into(),
        }
    }
}
