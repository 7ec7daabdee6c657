//! The sign-in screen controller.
//!
//! [`SignInScreen`] owns everything the screen animates with: the timing
//! driver holding the reveal progress, the interpolations derived from it,
//! and the frame clock. It is created by [`SignInScreen::mount`] and consumed
//! by [`SignInScreen::unmount`]; nothing outlives it.
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use portico::prelude::*;
//!
//! let mut screen = SignInScreen::mount(RevealConfig::default())?;
//!
//! // The host reports a completed tap on the "SIGN IN" button.
//! screen.handle_gesture(GestureEvent::tap(NodeId::SignInButton));
//!
//! // Then drives frames until the animation settles.
//! while screen.is_animating() {
//!     screen.tick(Duration::from_millis(16));
//! }
//!
//! let values = screen.derived();
//! assert_eq!(values.form_opacity, 1.0);
//! assert_eq!(values.close_icon_rotation, 180.0);
//! # Ok::<(), portico::Error>(())
//! ```

use std::time::{Duration, Instant};

use portico_core::logging::targets;
use portico_core::{TickOutcome, TimingDriver};

use crate::config::{RevealConfig, ScreenMetrics};
use crate::derived::{DerivedValues, RevealInterpolations};
use crate::error::Result;
use crate::frame::FrameClock;
use crate::gesture::{GestureEvent, ScreenCommand};
use crate::layout::{SceneLayout, render};

/// A mounted sign-in screen.
#[derive(Debug)]
pub struct SignInScreen {
    config: RevealConfig,
    driver: TimingDriver,
    interpolations: RevealInterpolations,
    frame_clock: FrameClock,
}

impl SignInScreen {
    /// Mount the screen.
    ///
    /// The configuration is validated here; a screen that mounted
    /// successfully cannot fail afterwards.
    pub fn mount(config: RevealConfig) -> Result<Self> {
        let timing = config.animation.timing()?;
        let interpolations = RevealInterpolations::new(&config.screen, &config.style)?;
        let driver = TimingDriver::with_config(config.animation.initial_progress, timing);

        tracing::debug!(
            target: targets::SCREEN,
            width = config.screen.width,
            height = config.screen.height,
            progress = driver.progress(),
            "mounted sign-in screen"
        );

        Ok(Self {
            config,
            driver,
            interpolations,
            frame_clock: FrameClock::new(),
        })
    }

    /// Unmount the screen, discarding its animation state.
    ///
    /// Returns the progress the screen was left at.
    pub fn unmount(self) -> f32 {
        let progress = self.driver.progress();
        tracing::debug!(
            target: targets::SCREEN,
            progress,
            animating = self.driver.is_running(),
            "unmounted sign-in screen"
        );
        progress
    }

    /// Feed a gesture state change from the host.
    ///
    /// Returns the command it triggered, if any.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<ScreenCommand> {
        let command = ScreenCommand::from_gesture(event)?;
        self.dispatch(command);
        Some(command)
    }

    /// Start the animation for `command`.
    ///
    /// Every command replays a full run from the current progress, even if
    /// the screen already rests where the command leads.
    pub fn dispatch(&mut self, command: ScreenCommand) {
        tracing::debug!(target: targets::SCREEN, ?command, "dispatching command");
        self.driver.request_toggle(command.target());
        // The run starts on the next presented frame.
        self.frame_clock.reset();
    }

    /// Advance the animation by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        self.driver.tick(dt)
    }

    /// Advance the animation to the frame presented at `now`.
    pub fn advance_to(&mut self, now: Instant) -> TickOutcome {
        let dt = self.frame_clock.delta(now);
        self.driver.tick(dt)
    }

    /// Resize the screen, rebuilding the size-dependent mappings.
    pub fn resize(&mut self, metrics: ScreenMetrics) -> Result<()> {
        self.interpolations = RevealInterpolations::new(&metrics, &self.config.style)?;
        self.config.screen = metrics;
        tracing::debug!(
            target: targets::SCREEN,
            width = metrics.width,
            height = metrics.height,
            "resized sign-in screen"
        );
        Ok(())
    }

    /// The current reveal progress.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.driver.progress()
    }

    /// Check if a run is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Whether the form currently covers the sign-in buttons.
    pub fn is_form_in_front(&self) -> bool {
        self.derived().form_z_index > 0.0
    }

    /// Read-only access to the driver, e.g. to connect to its signals.
    pub fn driver(&self) -> &TimingDriver {
        &self.driver
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Snapshot of every derived value at the current progress.
    pub fn derived(&self) -> DerivedValues {
        self.interpolations.derive(self.driver.progress())
    }

    /// Lay out the current frame.
    pub fn layout(&self) -> SceneLayout {
        render(&self.derived(), &self.config.screen, &self.config.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureState;
    use crate::layout::NodeId;
    use portico_core::TimingPhase;

    fn screen() -> SignInScreen {
        SignInScreen::mount(RevealConfig::default()).unwrap()
    }

    #[test]
    fn test_mount_starts_with_buttons_shown() {
        let screen = screen();
        assert_eq!(screen.progress(), 1.0);
        assert!(!screen.is_animating());
        assert!(!screen.is_form_in_front());
        assert_eq!(screen.driver().phase(), TimingPhase::Idle);
    }

    #[test]
    fn test_intermediate_gesture_states_ignored() {
        let mut screen = screen();
        for state in [GestureState::Began, GestureState::Active, GestureState::Cancelled] {
            let event = GestureEvent::new(NodeId::SignInButton, state);
            assert_eq!(screen.handle_gesture(event), None);
        }
        assert!(!screen.is_animating());
    }

    #[test]
    fn test_reveal_and_hide() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_gesture(GestureEvent::tap(NodeId::SignInButton)),
            Some(ScreenCommand::RevealForm)
        );
        assert!(screen.is_animating());
        assert_eq!(
            screen.tick(Duration::from_millis(600)),
            TickOutcome::Finished(0.0)
        );
        assert!(screen.is_form_in_front());

        screen.handle_gesture(GestureEvent::tap(NodeId::CloseButton));
        screen.tick(Duration::from_millis(600));
        assert_eq!(screen.progress(), 1.0);
        assert!(!screen.is_form_in_front());
    }

    #[test]
    fn test_advance_to_uses_frame_timestamps() {
        let mut screen = screen();
        let start = Instant::now();
        screen.dispatch(ScreenCommand::RevealForm);

        // The first frame after a command only sets the baseline.
        assert_eq!(screen.advance_to(start), TickOutcome::Idle);
        assert_eq!(screen.progress(), 1.0);

        let outcome = screen.advance_to(start + Duration::from_millis(300));
        assert!(matches!(outcome, TickOutcome::Advanced(p) if p < 1.0 && p > 0.0));

        let outcome = screen.advance_to(start + Duration::from_millis(600));
        assert_eq!(outcome, TickOutcome::Finished(0.0));
    }

    #[test]
    fn test_resize_rebuilds_background_pan() {
        let mut screen = screen();
        screen.dispatch(ScreenCommand::RevealForm);
        screen.tick(Duration::from_secs(1));

        screen.resize(ScreenMetrics::new(400.0, 600.0).unwrap()).unwrap();
        assert_eq!(screen.derived().background_y, -250.0);
        assert!(screen.resize(ScreenMetrics { width: -1.0, height: 10.0 }).is_err());
        // A rejected resize leaves the previous metrics in place.
        assert_eq!(screen.config().screen.height, 600.0);
    }

    #[test]
    fn test_unmount_reports_progress() {
        let mut screen = screen();
        screen.dispatch(ScreenCommand::RevealForm);
        screen.tick(Duration::from_millis(100));
        let progress = screen.progress();
        assert_eq!(screen.unmount(), progress);
    }

    #[test]
    fn test_layout_tracks_progress() {
        let mut screen = screen();
        let before = screen.layout();
        screen.dispatch(ScreenCommand::RevealForm);
        screen.tick(Duration::from_millis(200));
        let during = screen.layout();
        assert_ne!(before, during);

        let button = during.node(NodeId::SignInButton).unwrap();
        assert!(button.opacity < 1.0 && button.opacity > 0.0);
    }
}
