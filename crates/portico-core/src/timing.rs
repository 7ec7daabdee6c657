//! Timed animation of a single progress value.
//!
//! [`TimingDriver`] owns one scalar progress value together with the clock
//! and [`TimingState`] that animate it. A toggle request restarts the clock
//! and moves the progress from wherever it currently is toward an endpoint
//! (0 or 1) over a fixed duration, shaped by an easing curve. The host calls
//! [`TimingDriver::tick`] once per rendered frame with the frame's delta time.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use portico_core::timing::{TimingDriver, ToggleTarget};
//!
//! let mut driver = TimingDriver::new(1.0);
//! driver.request_toggle(ToggleTarget::Hidden);
//!
//! for _ in 0..6 {
//!     driver.tick(Duration::from_millis(100));
//! }
//!
//! assert_eq!(driver.progress(), 0.0);
//! assert!(driver.state().finished);
//! assert!(!driver.is_running());
//! ```

use std::time::Duration;

use crate::clock::AnimationClock;
use crate::easing::{Easing, lerp_eased};
use crate::error::{Error, Result};
use crate::logging::targets;
use crate::signal::Signal;

/// Default run length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// The two endpoints a toggle can animate toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleTarget {
    /// Progress 0.
    Hidden,
    /// Progress 1.
    Shown,
}

impl ToggleTarget {
    /// The progress value of this endpoint.
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Self::Hidden => 0.0,
            Self::Shown => 1.0,
        }
    }

    /// The opposite endpoint.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }
}

impl TryFrom<f32> for ToggleTarget {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        if value == 0.0 {
            Ok(Self::Hidden)
        } else if value == 1.0 {
            Ok(Self::Shown)
        } else {
            Err(Error::InvalidTarget { value })
        }
    }
}

/// Parameters of a timed run.
///
/// `duration` and `easing` are chosen when the driver is built; `to_value`
/// is overwritten by every toggle request and stays fixed for that run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Length of one full run.
    pub duration: Duration,
    /// The endpoint of the current run.
    pub to_value: f32,
    /// Curve mapping normalized elapsed time to normalized progress.
    pub easing: Easing,
}

impl TimingConfig {
    /// Create a configuration from a duration in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] for negative or non-finite values.
    pub fn from_millis(millis: f64, easing: Easing) -> Result<Self> {
        if !millis.is_finite() {
            return Err(Error::invalid_duration(millis, "duration must be finite"));
        }
        if millis < 0.0 {
            return Err(Error::invalid_duration(millis, "duration must not be negative"));
        }
        let nanos = (millis * 1_000_000.0).round();
        if nanos > u64::MAX as f64 {
            return Err(Error::invalid_duration(millis, "duration is too large"));
        }
        Ok(Self {
            duration: Duration::from_nanos(nanos as u64),
            easing,
            ..Self::default()
        })
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            to_value: 0.0,
            easing: Easing::InOutEase,
        }
    }
}

/// Per-run bookkeeping, updated once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimingState {
    /// Set exactly once per run, when the run reaches its endpoint.
    pub finished: bool,
    /// The animated value.
    pub position: f32,
    /// Total time advanced since the run started.
    pub elapsed_time: Duration,
    /// The delta time of the most recent tick.
    pub frame_time: Duration,
}

/// Where the driver is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingPhase {
    /// No run has been requested yet, or the driver was jumped to a value.
    #[default]
    Idle,
    /// A run is in flight.
    Running,
    /// The last run reached its endpoint and the clock is stopped.
    Finished,
}

/// Result of a single [`TimingDriver::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing happened: the clock is stopped or `dt` was zero.
    Idle,
    /// The run advanced to the contained progress.
    Advanced(f32),
    /// The run ended on this tick at the contained (target) progress.
    Finished(f32),
}

impl TickOutcome {
    /// The progress after the tick, if it changed anything.
    pub fn progress(&self) -> Option<f32> {
        match self {
            Self::Idle => None,
            Self::Advanced(progress) | Self::Finished(progress) => Some(*progress),
        }
    }
}

/// Drives a progress value toward 0 or 1 over a fixed duration.
///
/// The driver is the only writer of the progress value. Readers either poll
/// [`progress`](Self::progress) each frame or connect to the
/// [`progress_changed`](Self::progress_changed) signal.
#[derive(Debug)]
pub struct TimingDriver {
    clock: AnimationClock,
    state: TimingState,
    config: TimingConfig,
    /// Progress at the moment the current run started.
    origin: f32,
    phase: TimingPhase,
    started: Signal<ToggleTarget>,
    progress_changed: Signal<f32>,
    finished: Signal<ToggleTarget>,
}

impl TimingDriver {
    /// Create a driver holding `initial` progress with the default
    /// configuration (600 ms, in-out "ease" curve).
    pub fn new(initial: f32) -> Self {
        Self::with_config(initial, TimingConfig::default())
    }

    /// Create a driver with a specific configuration.
    ///
    /// The initial progress is clamped to [0, 1].
    pub fn with_config(initial: f32, config: TimingConfig) -> Self {
        let initial = clamp_progress(initial);
        Self {
            clock: AnimationClock::new(),
            state: TimingState {
                position: initial,
                ..TimingState::default()
            },
            config,
            origin: initial,
            phase: TimingPhase::Idle,
            started: Signal::new(),
            progress_changed: Signal::new(),
            finished: Signal::new(),
        }
    }

    /// The current progress.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.state.position
    }

    /// The bookkeeping of the current (or last) run.
    #[inline]
    pub fn state(&self) -> &TimingState {
        &self.state
    }

    /// The configuration of the current (or last) run.
    #[inline]
    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// The lifecycle phase.
    #[inline]
    pub fn phase(&self) -> TimingPhase {
        self.phase
    }

    /// Check if a run is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Signal emitted with the requested endpoint whenever a run starts.
    pub fn started(&self) -> &Signal<ToggleTarget> {
        &self.started
    }

    /// Signal emitted with the new progress whenever it changes.
    pub fn progress_changed(&self) -> &Signal<f32> {
        &self.progress_changed
    }

    /// Signal emitted with the reached endpoint when a run finishes.
    pub fn finished(&self) -> &Signal<ToggleTarget> {
        &self.finished
    }

    /// Start a run toward `target` from the current progress.
    ///
    /// Any in-flight run is superseded: its state is reset and the new run
    /// starts from wherever the progress currently sits, so reversing
    /// mid-run is continuous. Requesting the endpoint the driver already
    /// rests on still replays a full run.
    pub fn request_toggle(&mut self, target: ToggleTarget) {
        let superseded = self.clock.is_running();

        self.state.finished = false;
        self.state.elapsed_time = Duration::ZERO;
        self.state.frame_time = Duration::ZERO;
        self.origin = self.state.position;
        self.config.to_value = target.value();
        self.clock.start();
        self.phase = TimingPhase::Running;

        tracing::debug!(
            target: targets::TIMING,
            run = self.clock.run_id(),
            from = self.origin,
            to = self.config.to_value,
            superseded,
            "start clock"
        );
        self.started.emit(target);
    }

    /// Advance the current run by `dt`.
    ///
    /// Does nothing while the clock is stopped or when `dt` is zero. When
    /// the accumulated time reaches the duration, the progress is set to the
    /// target exactly, the run is marked finished and the clock stops.
    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        if !self.clock.is_running() || dt.is_zero() {
            return TickOutcome::Idle;
        }

        self.state.frame_time = dt;
        self.state.elapsed_time = self.state.elapsed_time.saturating_add(dt);

        if self.state.elapsed_time >= self.config.duration {
            let target = self.config.to_value;
            self.set_position(target);
            self.state.finished = true;
            self.clock.stop();
            self.phase = TimingPhase::Finished;

            tracing::debug!(
                target: targets::TIMING,
                run = self.clock.run_id(),
                position = target,
                "stop clock"
            );
            if let Ok(reached) = ToggleTarget::try_from(target) {
                self.finished.emit(reached);
            }
            return TickOutcome::Finished(target);
        }

        let t = self.state.elapsed_time.as_secs_f32() / self.config.duration.as_secs_f32();
        let position = clamp_progress(lerp_eased(
            self.config.easing,
            self.origin,
            self.config.to_value,
            t,
        ));
        self.set_position(position);

        tracing::trace!(
            target: targets::TIMING,
            elapsed_ms = self.state.elapsed_time.as_millis() as u64,
            position,
            "tick"
        );
        TickOutcome::Advanced(position)
    }

    /// Stop any run and place the progress at `value` (clamped to [0, 1]).
    pub fn jump_to(&mut self, value: f32) {
        if self.clock.stop() {
            tracing::debug!(target: targets::TIMING, run = self.clock.run_id(), "stop clock (jump)");
        }
        self.state = TimingState {
            position: self.state.position,
            ..TimingState::default()
        };
        self.phase = TimingPhase::Idle;
        self.set_position(clamp_progress(value));
        self.origin = self.state.position;
    }

    fn set_position(&mut self, position: f32) {
        if self.state.position != position {
            self.state.position = position;
            self.progress_changed.emit(position);
        }
    }
}

/// Clamp to [0, 1], mapping NaN to 0.
#[inline]
fn clamp_progress(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
