//! Frame pacing.
//!
//! Hosts usually hand out a timestamp per rendered frame rather than a
//! delta. [`FrameClock`] turns successive timestamps into the `dt` values
//! the timing driver consumes.

use std::time::{Duration, Instant};

/// Converts frame timestamps into frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the time since the previous one.
    ///
    /// The first frame after creation or [`reset`](Self::reset) returns
    /// zero. Timestamps that go backwards also yield zero.
    pub fn delta(&mut self, now: Instant) -> Duration {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        dt
    }

    /// Forget the previous frame, so the next delta starts from zero.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        assert_eq!(clock.delta(start), Duration::ZERO);
        assert_eq!(
            clock.delta(start + Duration::from_millis(16)),
            Duration::from_millis(16)
        );
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now() + Duration::from_secs(1);
        clock.delta(start);
        assert_eq!(clock.delta(start - Duration::from_millis(5)), Duration::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta(start);
        clock.reset();
        assert_eq!(clock.delta(start + Duration::from_secs(3)), Duration::ZERO);
    }
}
