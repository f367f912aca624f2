//! Per-tick orchestration
//!
//! One fixed-order pass over the whole session per fixed timestep. The order
//! matters and is part of the contract: car motion and score first, then the
//! difficulty timeline, then spawning against the *current* difficulty, then
//! entity integration and culling, then timers, then collision resolution.
//! Collision resolution applies at most one obstacle hit and at most one
//! pickup per tick (first match in iteration order); a tick is short enough
//! that the next candidate simply lands next tick.

use super::entities::aabb_overlap;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input intents for a single tick. All one-shot: the host sets them between
/// ticks and clears them after each tick so nothing queues across ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub pause: bool,
    pub restart: bool,
}

/// Advance the session by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        log::info!("restart requested, resetting session (seed {})", state.seed);
        state.reset();
        return;
    }

    // Pause toggles are ignored once the run is over
    if input.pause && state.running {
        state.paused = !state.paused;
    }
    if !state.running || state.paused {
        return;
    }

    // Lane-change intents. The cue fires on the intent, even when clamped at
    // the outer lanes.
    if input.move_left {
        state.car.move_left();
        state.push_event(GameEvent::LaneChange);
    }
    if input.move_right {
        state.car.move_right();
        state.push_event(GameEvent::LaneChange);
    }

    state.car.update(dt);

    state.score.update(f64::from(dt), state.power_up.multiplier());

    if state.level.update(dt) {
        state.phase_overlay_timer = PHASE_OVERLAY_SECONDS;
        state.push_event(GameEvent::Checkpoint);
        log::info!("entering phase: {}", state.level.current_phase().name);
    }

    // Spawn against the post-update difficulty
    let diff = state.level.difficulty();
    let batch = state
        .spawner
        .update(dt, &diff, &state.config.lanes, &state.obstacles);
    state.obstacles.extend(batch.obstacles);
    state.pickups.extend(batch.pickup);

    // Integrate and cull. An obstacle that leaves the bottom edge was
    // successfully passed: it pays the overtake bonus.
    let view_height = state.config.view_height;
    for o in &mut state.obstacles {
        o.update(dt);
    }
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_offscreen(view_height));
    for _ in state.obstacles.len()..before {
        state.score.add_overtake(OVERTAKE_BONUS);
    }

    for p in &mut state.pickups {
        p.update(dt);
    }
    state.pickups.retain(|p| !p.is_offscreen(view_height));

    // Timers: post-hit invulnerability plus the render-only flash/overlay
    state.lives.update(dt);
    if state.flash_timer > 0.0 {
        state.flash_timer = (state.flash_timer - dt).max(0.0);
    }
    if state.phase_overlay_timer > 0.0 {
        state.phase_overlay_timer = (state.phase_overlay_timer - dt).max(0.0);
    }

    if state.power_up.update(dt) {
        state.push_event(GameEvent::TimerBeep);
    }

    resolve_obstacle_hit(state);
    resolve_pickup(state);
}

/// At most one obstacle hit per tick, skipped entirely while immune.
fn resolve_obstacle_hit(state: &mut GameState) {
    if state.is_immune() {
        return;
    }
    let car_pos = state.car.pos;
    let car_size = state.car.size();
    let hit = state
        .obstacles
        .iter()
        .any(|o| aabb_overlap(car_pos, car_size, o.pos, o.size()));
    if hit && state.lives.hit() {
        state.flash_timer = HIT_FLASH_SECONDS;
        state.push_event(GameEvent::Hit);
        log::info!("hit, lives={}", state.lives.lives());
        if !state.lives.is_alive() {
            state.running = false;
            state.push_event(GameEvent::GameOver);
        }
    }
}

/// At most one pickup collected per tick (first overlap in iteration order).
fn resolve_pickup(state: &mut GameState) {
    let car_pos = state.car.pos;
    let car_size = state.car.size();
    let collected = state
        .pickups
        .iter()
        .position(|p| aabb_overlap(car_pos, car_size, p.pos, p.size()));
    if let Some(i) = collected {
        let pickup = state.pickups.remove(i);
        state.power_up.activate(pickup.kind);
        state.push_event(GameEvent::PowerUpCollected(pickup.kind));
    }
}
