//! Enduro Dash - an 8-bit lane-dodging arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fixed timestep, spawning, collisions, game state)
//! - `tuning`: Data-driven phase/difficulty tables
//! - `input`: Pure key/pointer/swipe to intent mapping
//! - `render`: Canvas 2D drawing (wasm only)
//! - `audio`: Web Audio oscillator SFX and engine drone (wasm only)
//! - `prefs`: Persisted audio mute preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod hud;
pub mod input;
pub mod prefs;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;
pub mod tuning;

pub use prefs::AudioPrefs;
pub use tuning::{Phase, PhaseTable};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep, 60 Hz, in milliseconds
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Canvas dimensions
    pub const VIEW_WIDTH: f32 = 480.0;
    pub const VIEW_HEIGHT: f32 = 640.0;
    /// Horizontal margin on each side of the road
    pub const ROAD_MARGIN: f32 = 64.0;

    /// Player car
    pub const CAR_Y: f32 = 540.0;
    pub const CAR_WIDTH: f32 = 32.0;
    pub const CAR_HEIGHT: f32 = 48.0;
    /// Lane interpolation speed, pixels/second
    pub const CAR_LANE_SPEED: f32 = 300.0;
    /// Remaining distance below which the car snaps to its target lane
    pub const LANE_SNAP_EPSILON: f32 = 1.0;

    /// Obstacles
    pub const OBSTACLE_WIDTH: f32 = 32.0;
    pub const OBSTACLE_HEIGHT: f32 = 48.0;
    /// Base descent speed before the phase multiplier, pixels/second
    pub const OBSTACLE_BASE_SPEED: f32 = 80.0;
    /// Random extra descent speed, pixels/second
    pub const OBSTACLE_SPEED_JITTER: f32 = 60.0;
    /// Entities enter just above the top edge
    pub const SPAWN_Y: f32 = -60.0;
    /// Sub-step length used to bound per-draw spawn probability below 1
    pub const SPAWN_SUBSTEP: f32 = 0.1;

    /// Pickups
    pub const PICKUP_SIZE: f32 = 24.0;
    pub const PICKUP_SPEED: f32 = 60.0;
    /// Seconds between pickup spawns
    pub const PICKUP_SPAWN_INTERVAL: f32 = 10.0;

    /// Lives
    pub const MAX_LIVES: u32 = 3;
    /// Post-hit invulnerability window, seconds
    pub const INVULN_SECONDS: f32 = 1.5;

    /// Power-ups
    pub const INVULN_POWERUP_SECONDS: f32 = 5.0;
    pub const SCOREBOOST_SECONDS: f32 = 8.0;
    pub const SCOREBOOST_MULTIPLIER: f64 = 2.0;

    /// Scoring
    pub const POINTS_PER_SECOND: f64 = 10.0;
    pub const OVERTAKE_BONUS: f64 = 50.0;

    /// Visual-only timers, seconds
    pub const HIT_FLASH_SECONDS: f32 = 0.3;
    pub const PHASE_OVERLAY_SECONDS: f32 = 2.0;
}

/// Lane x-centers for a given canvas width: three lanes at 1/6, 3/6 and 5/6
/// of the road width, rounded to whole pixels.
pub fn compute_lane_positions(view_width: f32) -> Vec<f32> {
    let road_x = consts::ROAD_MARGIN;
    let road_w = view_width - 2.0 * consts::ROAD_MARGIN;
    [1.0 / 6.0, 3.0 / 6.0, 5.0 / 6.0]
        .iter()
        .map(|f| (road_x + road_w * f).round())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_positions_equal_spacing() {
        let lanes = compute_lane_positions(480.0);
        assert_eq!(lanes.len(), 3);
        // Middle lane sits at the canvas center
        assert_eq!(lanes[1], 240.0);
        assert_eq!(lanes[1] - lanes[0], lanes[2] - lanes[1]);
        for x in &lanes {
            assert!(*x > consts::ROAD_MARGIN && *x < 480.0 - consts::ROAD_MARGIN);
        }
    }
}
