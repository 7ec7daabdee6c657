//! Logical animation clock.
//!
//! An [`AnimationClock`] does not read wall time itself. It only records
//! whether an animation run is in flight; elapsed time is fed in by whoever
//! drives the frames (see [`crate::timing::TimingDriver::tick`]).

/// A running/stopped switch tied to one animation run at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationClock {
    running: bool,
    /// Number of times the clock has been started.
    starts: u64,
}

impl AnimationClock {
    /// Create a stopped clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the clock.
    ///
    /// Returns `true` if the clock was already running, i.e. an in-flight
    /// run is being superseded.
    pub fn start(&mut self) -> bool {
        let was_running = self.running;
        self.running = true;
        self.starts += 1;
        was_running
    }

    /// Stop the clock.
    ///
    /// Returns `true` if the clock was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Check if the clock is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How many runs this clock has started, used to tag log events.
    #[inline]
    pub fn run_id(&self) -> u64 {
        self.starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_start_stop() {
        let mut clock = AnimationClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.run_id(), 0);

        assert!(!clock.start());
        assert!(clock.is_running());
        assert_eq!(clock.run_id(), 1);

        // Restarting reports the superseded run
        assert!(clock.start());
        assert_eq!(clock.run_id(), 2);

        assert!(clock.stop());
        assert!(!clock.is_running());
        assert!(!clock.stop());
    }
}
