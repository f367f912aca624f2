//! Score accrual
//!
//! Score grows continuously with survival time and in discrete jumps for
//! overtakes. Accumulation stays in full f64 precision; only the reported
//! value is floored, so sixty tiny per-tick increments per second never lose
//! points to premature rounding.

use crate::consts::POINTS_PER_SECOND;

#[derive(Debug, Clone)]
pub struct ScoreManager {
    points_per_sec: f64,
    score: f64,
    time: f64,
}

impl ScoreManager {
    pub fn new(points_per_sec: f64) -> Self {
        Self {
            points_per_sec,
            score: 0.0,
            time: 0.0,
        }
    }

    /// Accrue `dt` seconds of survival at the given multiplier (2 while a
    /// score boost is active, otherwise 1).
    pub fn update(&mut self, dt: f64, multiplier: f64) {
        self.time += dt;
        self.score += self.points_per_sec * dt * multiplier;
    }

    /// Flat bonus for slipping past an obstacle.
    pub fn add_overtake(&mut self, bonus: f64) {
        self.score += bonus;
    }

    /// Reported score: floor of the accumulated value.
    pub fn score(&self) -> u64 {
        self.score as u64
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn reset(&mut self) {
        self.score = 0.0;
        self.time = 0.0;
    }
}

impl Default for ScoreManager {
    fn default() -> Self {
        Self::new(POINTS_PER_SECOND)
    }
}
