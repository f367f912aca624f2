//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (single LCG stream owned by the spawner)
//! - No rendering or platform dependencies

pub mod clock;
pub mod entities;
pub mod level;
pub mod lives;
pub mod powerup;
pub mod rng;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::{FrameClock, drain_accumulator};
pub use entities::{Car, Obstacle, Pickup, PickupKind, aabb_overlap};
pub use level::{Difficulty, LevelManager};
pub use lives::PlayerLives;
pub use powerup::PowerUp;
pub use rng::Lcg32;
pub use score::ScoreManager;
pub use spawner::{SpawnBatch, Spawner};
pub use state::{GameEvent, GameState, SimConfig};
pub use tick::{TickInput, tick};
