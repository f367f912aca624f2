//! Game session state
//!
//! Everything a run needs lives in one explicit struct owned by the tick
//! loop: no module-level globals, no hidden platform dependencies. A session
//! is fully determined by its seed, its config, and the tick inputs fed to
//! it, so whole runs replay identically in tests.

use super::entities::{Car, Obstacle, Pickup, PickupKind};
use super::level::LevelManager;
use super::lives::PlayerLives;
use super::powerup::PowerUp;
use super::score::ScoreManager;
use super::spawner::Spawner;
use crate::consts::*;
use crate::tuning::PhaseTable;

/// Static per-session configuration. Validated before the session starts;
/// the tick loop never re-checks it.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub view_width: f32,
    pub view_height: f32,
    /// Ordered lane x-centers; the index is the lane identity.
    pub lanes: Vec<f32>,
    pub phases: PhaseTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            lanes: vec![80.0, 240.0, 400.0],
            phases: PhaseTable::standard(),
        }
    }
}

/// Discrete one-shot cues for the audio/haptics collaborators, drained after
/// each tick batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LaneChange,
    Hit,
    /// Phase transition
    Checkpoint,
    PowerUpCollected(PickupKind),
    TimerBeep,
    GameOver,
}

/// Complete state of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u32,
    pub config: SimConfig,
    pub car: Car,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,
    pub spawner: Spawner,
    pub level: LevelManager,
    pub lives: PlayerLives,
    pub power_up: PowerUp,
    pub score: ScoreManager,
    pub running: bool,
    pub paused: bool,
    /// White screen flash after a hit (render-only)
    pub flash_timer: f32,
    /// Phase-name pill after a checkpoint (render-only)
    pub phase_overlay_timer: f32,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u32, config: SimConfig) -> Self {
        Self {
            seed,
            car: Car::new(config.lanes.len() / 2, config.lanes.clone()),
            obstacles: Vec::new(),
            pickups: Vec::new(),
            spawner: Spawner::new(seed),
            level: LevelManager::new(config.phases.clone()),
            lives: PlayerLives::default(),
            power_up: PowerUp::new(),
            score: ScoreManager::default(),
            running: true,
            paused: false,
            flash_timer: 0.0,
            phase_overlay_timer: 0.0,
            events: Vec::new(),
            config,
        }
    }

    /// Restore every core field to its initial value, deterministically, for
    /// restart-after-game-over. Reuses the session seed: the same inputs
    /// produce the same run again.
    pub fn reset(&mut self) {
        self.car = Car::new(self.config.lanes.len() / 2, self.config.lanes.clone());
        self.obstacles.clear();
        self.pickups.clear();
        self.spawner.reset();
        self.level.reset();
        self.lives.reset();
        self.power_up.reset();
        self.score.reset();
        self.running = true;
        self.paused = false;
        self.flash_timer = 0.0;
        self.phase_overlay_timer = 0.0;
        self.events.clear();
    }

    /// True while the engine drone should run at boost pitch.
    pub fn engine_boosted(&self) -> bool {
        self.power_up.boosted()
    }

    /// True while obstacle collisions are ignored, from either immunity
    /// source: the post-hit window or an invuln power-up.
    pub fn is_immune(&self) -> bool {
        self.lives.is_invulnerable() || self.power_up.shields()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the one-shot event queue. Hosts call this once per tick batch
    /// and fan the events out to audio/haptics.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
