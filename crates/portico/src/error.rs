//! Error types for the sign-in screen.

use std::path::PathBuf;

/// Result type alias for screen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or mounting the screen.
///
/// All of these surface before the first frame. Ticking, gesture handling
/// and rendering never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An animation primitive rejected its configuration.
    #[error(transparent)]
    Animation(#[from] portico_core::Error),

    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration could not be written back out as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Screen dimensions that cannot be laid out.
    #[error("Invalid screen metrics {width}x{height}: dimensions must be positive and finite")]
    InvalidMetrics { width: f32, height: f32 },

    /// A color string that is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid color '{value}'")]
    InvalidColor { value: String },

    /// A starting progress outside [0, 1].
    #[error("Invalid initial progress {value}: expected a value in [0, 1]")]
    InvalidProgress { value: f32 },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
