//! Phase timeline and difficulty projection
//!
//! A state machine over an ordered phase table. The phase index only ever
//! moves forward; when a phase's duration elapses the manager advances and
//! restarts the in-phase timer at zero. Any overshoot past the boundary is
//! dropped rather than rolled into the next phase. The terminal phase never
//! transitions out.

use crate::tuning::{Phase, PhaseTable};

/// Difficulty parameters projected from the active phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub base_speed: f32,
    pub spawn_rate: f32,
    pub min_gap: f32,
}

#[derive(Debug, Clone)]
pub struct LevelManager {
    table: PhaseTable,
    current: usize,
    elapsed_in_phase: f32,
    total_elapsed: f32,
}

impl LevelManager {
    pub fn new(table: PhaseTable) -> Self {
        Self {
            table,
            current: 0,
            elapsed_in_phase: 0.0,
            total_elapsed: 0.0,
        }
    }

    pub fn current_phase(&self) -> &Phase {
        &self.table.phases()[self.current]
    }

    pub fn difficulty(&self) -> Difficulty {
        let p = self.current_phase();
        Difficulty {
            base_speed: p.base_speed,
            spawn_rate: p.spawn_rate,
            min_gap: p.min_gap,
        }
    }

    pub fn total_elapsed(&self) -> f32 {
        self.total_elapsed
    }

    /// Advance the timeline. Returns true when this update crossed into the
    /// next phase.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed_in_phase += dt;
        self.total_elapsed += dt;
        if self.elapsed_in_phase >= self.current_phase().duration
            && self.current < self.table.len() - 1
        {
            self.current += 1;
            self.elapsed_in_phase = 0.0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.elapsed_in_phase = 0.0;
        self.total_elapsed = 0.0;
    }
}

impl Default for LevelManager {
    fn default() -> Self {
        Self::new(PhaseTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let lm = LevelManager::default();
        assert_eq!(lm.current_phase().id, 1);
        let d = lm.difficulty();
        assert_eq!(d.base_speed, 1.0);
        assert_eq!(d.spawn_rate, 0.4);
    }

    #[test]
    fn test_transition_at_duration() {
        let mut lm = LevelManager::default();

        // 19 seconds in: still phase 1
        assert!(!lm.update(19.0));
        assert_eq!(lm.current_phase().id, 1);

        // crossing the 20s boundary transitions to phase 2
        assert!(lm.update(1.1));
        assert_eq!(lm.current_phase().id, 2);
        let d = lm.difficulty();
        assert_eq!(d.base_speed, 1.3);
        assert_eq!(d.spawn_rate, 0.6);

        // the 0.1s overshoot was dropped: a full phase-2 duration is needed
        assert!(lm.update(40.0));
        assert_eq!(lm.current_phase().id, 3);
    }

    #[test]
    fn test_phase_index_monotone() {
        let mut lm = LevelManager::default();
        let mut last = 0;
        for _ in 0..4000 {
            lm.update(0.1);
            let id = lm.current_phase().id;
            assert!(id >= last);
            last = id;
        }
    }

    #[test]
    fn test_terminal_phase_saturates() {
        let mut lm = LevelManager::default();
        lm.update(20.0);
        lm.update(40.0);
        lm.update(80.0);
        assert_eq!(lm.current_phase().id, 4);
        // far past any duration: no further transition
        assert!(!lm.update(1_000_000.0));
        assert_eq!(lm.current_phase().id, 4);
    }

    #[test]
    fn test_reset() {
        let mut lm = LevelManager::default();
        lm.update(25.0);
        assert_eq!(lm.current_phase().id, 2);
        lm.reset();
        assert_eq!(lm.current_phase().id, 1);
        assert_eq!(lm.total_elapsed(), 0.0);
    }
}
