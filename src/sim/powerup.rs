//! Active power-up buff and its countdown
//!
//! At most one buff is active at a time; collecting a pickup overwrites the
//! current one. The countdown emits a one-shot beep cue as it crosses each of
//! the 3/2/1-second marks (edge-triggered against the pre-decrement value),
//! and clears the buff when it reaches zero.

use super::entities::PickupKind;
use crate::consts::{INVULN_POWERUP_SECONDS, SCOREBOOST_MULTIPLIER, SCOREBOOST_SECONDS};

/// Integer-second marks that fire a timer beep once each.
const BEEP_THRESHOLDS: [f32; 3] = [3.0, 2.0, 1.0];

#[derive(Debug, Clone, Default)]
pub struct PowerUp {
    active: Option<PickupKind>,
    remaining: f32,
}

impl PowerUp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<PickupKind> {
        self.active
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// True while an invuln buff shields the player from obstacle hits.
    pub fn shields(&self) -> bool {
        self.active == Some(PickupKind::Invuln)
    }

    /// True while a score boost doubles accrual (also drives the engine pitch).
    pub fn boosted(&self) -> bool {
        self.active == Some(PickupKind::ScoreBoost)
    }

    /// Score multiplier for the current tick.
    pub fn multiplier(&self) -> f64 {
        if self.boosted() { SCOREBOOST_MULTIPLIER } else { 1.0 }
    }

    /// Activate a collected buff, replacing any current one.
    pub fn activate(&mut self, kind: PickupKind) {
        self.active = Some(kind);
        self.remaining = match kind {
            PickupKind::Invuln => INVULN_POWERUP_SECONDS,
            PickupKind::ScoreBoost => SCOREBOOST_SECONDS,
        };
    }

    /// Decay the countdown. Returns true when a beep threshold was crossed
    /// this tick (at most one per tick).
    pub fn update(&mut self, dt: f32) -> bool {
        if self.active.is_none() {
            return false;
        }
        let before = self.remaining;
        self.remaining = (self.remaining - dt).max(0.0);

        let mut beeped = false;
        for threshold in BEEP_THRESHOLDS {
            if before > threshold && self.remaining <= threshold {
                beeped = true;
                break;
            }
        }

        if self.remaining <= 0.0 {
            self.active = None;
        }
        beeped
    }

    pub fn reset(&mut self) {
        self.active = None;
        self.remaining = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_durations() {
        let mut p = PowerUp::new();
        p.activate(PickupKind::Invuln);
        assert_eq!(p.remaining(), 5.0);
        assert!(p.shields());
        assert_eq!(p.multiplier(), 1.0);

        p.activate(PickupKind::ScoreBoost);
        assert_eq!(p.remaining(), 8.0);
        assert!(p.boosted());
        assert!(!p.shields());
        assert_eq!(p.multiplier(), 2.0);
    }

    #[test]
    fn test_beeps_once_per_threshold() {
        let mut p = PowerUp::new();
        p.activate(PickupKind::Invuln);

        let dt = 1.0 / 60.0;
        let mut beeps = 0;
        let mut ticks = 0;
        while p.active().is_some() {
            if p.update(dt) {
                beeps += 1;
                // each beep fires just as remaining crosses a whole second
                let frac = p.remaining().fract();
                assert!(frac > 0.9 || frac < 0.1);
            }
            ticks += 1;
            assert!(ticks < 1000, "power-up never expired");
        }
        assert_eq!(beeps, 3);
    }

    #[test]
    fn test_beep_edge_triggered() {
        let mut p = PowerUp::new();
        p.activate(PickupKind::Invuln);
        // jump straight past the 3s mark
        assert!(p.update(2.5));
        // sitting below it produces no further beep for that mark
        assert!(!p.update(0.25));
    }

    #[test]
    fn test_expiry_clears_type() {
        let mut p = PowerUp::new();
        p.activate(PickupKind::ScoreBoost);
        p.update(7.99);
        assert!(p.boosted());
        p.update(0.02);
        assert_eq!(p.active(), None);
        assert_eq!(p.remaining(), 0.0);
        assert_eq!(p.multiplier(), 1.0);
    }

    #[test]
    fn test_idle_update_is_inert() {
        let mut p = PowerUp::new();
        assert!(!p.update(1.0));
        assert_eq!(p.active(), None);
    }
}
