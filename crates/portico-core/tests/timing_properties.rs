//! Property tests for the timing driver and interpolation primitives.

use std::time::Duration;

use portico_core::{Easing, Extrapolate, Interpolation, TimingDriver, ToggleTarget, ease};
use proptest::prelude::*;

/// Split `total_ms` into `cuts.len() + 1` positive frame deltas.
fn frame_deltas(total_ms: u64, mut cuts: Vec<u64>) -> Vec<Duration> {
    cuts.retain(|&c| c > 0 && c < total_ms);
    cuts.sort_unstable();
    cuts.dedup();

    let mut deltas = Vec::with_capacity(cuts.len() + 1);
    let mut last = 0;
    for cut in cuts.into_iter().chain(std::iter::once(total_ms)) {
        deltas.push(Duration::from_millis(cut - last));
        last = cut;
    }
    deltas
}

proptest! {
    #[test]
    fn dt_sequence_summing_to_duration_lands_on_target(
        cuts in prop::collection::vec(1u64..600, 0..40),
        reveal in any::<bool>(),
    ) {
        let (initial, target) = if reveal {
            (1.0, ToggleTarget::Hidden)
        } else {
            (0.0, ToggleTarget::Shown)
        };
        let mut driver = TimingDriver::new(initial);
        driver.request_toggle(target);

        let deltas = frame_deltas(600, cuts);
        let (last, body) = deltas.split_last().unwrap();
        for dt in body {
            driver.tick(*dt);
            prop_assert!(driver.is_running());
        }
        driver.tick(*last);

        prop_assert!((driver.progress() - target.value()).abs() < 1e-6);
        prop_assert!(driver.state().finished);
        prop_assert!(!driver.is_running());
    }

    #[test]
    fn reversal_never_jumps(
        first_ms in 1u64..599,
        second_dt_ms in 1u64..5,
    ) {
        let mut driver = TimingDriver::new(1.0);
        driver.request_toggle(ToggleTarget::Hidden);
        driver.tick(Duration::from_millis(first_ms));
        let before = driver.progress();

        driver.request_toggle(ToggleTarget::Shown);
        prop_assert_eq!(driver.progress(), before);

        driver.tick(Duration::from_millis(second_dt_ms));
        // A few milliseconds into a 600ms eased run cannot move far.
        prop_assert!((driver.progress() - before).abs() < 0.01);
    }

    #[test]
    fn progress_stays_in_unit_interval(
        deltas in prop::collection::vec(0u64..100, 1..60),
        toggles in prop::collection::vec(any::<bool>(), 1..60),
    ) {
        let mut driver = TimingDriver::new(1.0);
        for (dt, toggle) in deltas.iter().zip(toggles.iter()) {
            if *toggle {
                let target = if driver.progress() > 0.5 {
                    ToggleTarget::Hidden
                } else {
                    ToggleTarget::Shown
                };
                driver.request_toggle(target);
            }
            driver.tick(Duration::from_millis(*dt));
            prop_assert!((0.0..=1.0).contains(&driver.progress()));
        }
    }

    #[test]
    fn in_out_ease_is_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ease(Easing::InOutEase, lo) <= ease(Easing::InOutEase, hi) + 1e-6);
    }

    #[test]
    fn clamped_interpolation_stays_within_output(
        out0 in -500.0f32..500.0,
        out1 in -500.0f32..500.0,
        x in -10.0f32..10.0,
    ) {
        let mapping = Interpolation::new([0.0, 1.0], [out0, out1], Extrapolate::Clamp).unwrap();
        let value = mapping.eval(x);
        let (lo, hi) = if out0 <= out1 { (out0, out1) } else { (out1, out0) };
        prop_assert!(value >= lo - 1e-3 && value <= hi + 1e-3);
    }
}
