//! Animation primitives for Portico.
//!
//! This crate provides the building blocks the sign-in screen animates with:
//!
//! - **Easing**: curves mapping normalized time to normalized progress
//! - **Interpolation**: validated piecewise-linear range mappings
//! - **Clock**: the running/stopped switch behind one animation run
//! - **Timing driver**: the state machine that moves a progress value toward
//!   0 or 1 over a fixed duration
//! - **Signals**: change notification for whoever renders the values
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use portico_core::{Extrapolate, Interpolation, TimingDriver, ToggleTarget};
//!
//! let mut driver = TimingDriver::new(1.0);
//! let rotation = Interpolation::new([0.0, 1.0], [180.0, 360.0], Extrapolate::Clamp)?;
//!
//! driver.request_toggle(ToggleTarget::Hidden);
//! while driver.is_running() {
//!     driver.tick(Duration::from_millis(16));
//! }
//!
//! assert_eq!(rotation.eval(driver.progress()), 180.0);
//! # Ok::<(), portico_core::Error>(())
//! ```

pub mod clock;
pub mod easing;
mod error;
pub mod interpolate;
pub mod logging;
pub mod signal;
pub mod timing;

pub use clock::AnimationClock;
pub use easing::{CubicBezier, Easing, ease, lerp_eased};
pub use error::{Error, Result};
pub use interpolate::{Extrapolate, Interpolation};
pub use signal::{ConnectionId, Signal};
pub use timing::{
    DEFAULT_DURATION, TickOutcome, TimingConfig, TimingDriver, TimingPhase, TimingState,
    ToggleTarget,
};
