//! Fixed-timestep accumulator
//!
//! Decouples simulation rate from display refresh rate. Each rendered frame
//! contributes its wall-time to an accumulator; the simulation runs one fixed
//! tick per full timestep in the accumulator and carries the remainder
//! forward. No tick is ever dropped or double-applied, so a given sequence of
//! frame times plus a seed replays identically. A stall produces a burst of
//! ticks rather than a gap; the burst is not clamped.

use crate::consts::TICK_MS;

/// Drain `accumulator + frame_ms` into whole ticks of `tick_ms`.
///
/// Returns `(ticks, remainder)` with the remainder always in `[0, tick_ms)`.
pub fn drain_accumulator(accumulator: f64, frame_ms: f64, tick_ms: f64) -> (u32, f64) {
    let mut acc = accumulator + frame_ms;
    let mut ticks = 0;
    while acc >= tick_ms {
        acc -= tick_ms;
        ticks += 1;
    }
    (ticks, acc)
}

/// Per-session clock state: last frame timestamp plus the running accumulator.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    accumulator: f64,
    tick_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FrameClock {
    pub fn new(tick_ms: f64) -> Self {
        Self {
            last_time: None,
            accumulator: 0.0,
            tick_ms,
        }
    }

    /// Feed a frame timestamp (milliseconds) and get the number of fixed
    /// ticks to run. The first frame only establishes the time base.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_time else {
            self.last_time = Some(now_ms);
            return 0;
        };
        let frame_ms = (now_ms - last).max(0.0);
        self.last_time = Some(now_ms);

        let (ticks, acc) = drain_accumulator(self.accumulator, frame_ms, self.tick_ms);
        self.accumulator = acc;
        ticks
    }

    /// Fraction of a tick left in the accumulator, in `[0, 1)`. Renderers use
    /// this to extrapolate entity motion between ticks.
    pub fn interpolation(&self) -> f32 {
        (self.accumulator / self.tick_ms) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_single_tick() {
        let (ticks, acc) = drain_accumulator(0.0, 16.0, 16.0);
        assert_eq!(ticks, 1);
        assert_eq!(acc, 0.0);
    }

    #[test]
    fn test_multiple_ticks_in_one_frame() {
        let (ticks, acc) = drain_accumulator(0.0, 50.0, 16.0);
        assert_eq!(ticks, 3);
        assert_eq!(acc, 2.0);
    }

    #[test]
    fn test_accumulator_carryover() {
        let (ticks, acc) = drain_accumulator(10.0, 10.0, 16.0);
        assert_eq!(ticks, 1);
        assert_eq!(acc, 4.0);
    }

    #[test]
    fn test_first_frame_establishes_base() {
        let mut clock = FrameClock::new(16.0);
        assert_eq!(clock.advance(1000.0), 0);
        assert_eq!(clock.advance(1032.0), 2);
        assert_eq!(clock.interpolation(), 0.0);
    }

    #[test]
    fn test_stall_produces_burst_not_gap() {
        let mut clock = FrameClock::new(16.0);
        clock.advance(0.0);
        // 500ms stall: every elapsed tick runs, none are skipped
        assert_eq!(clock.advance(500.0), 31);
        assert!((clock.interpolation() - 4.0 / 16.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_ticks_and_remainder(acc in 0.0f64..16.0, frame in 0.0f64..2000.0) {
            let tick = 1000.0 / 60.0;
            let (ticks, rem) = drain_accumulator(acc, frame, tick);
            prop_assert_eq!(ticks as f64, ((acc + frame) / tick).floor());
            prop_assert!(rem >= 0.0 && rem < tick);
            // nothing is lost: ticks * tick + remainder == input (up to fp error)
            prop_assert!((ticks as f64 * tick + rem - (acc + frame)).abs() < 1e-6);
        }
    }
}
