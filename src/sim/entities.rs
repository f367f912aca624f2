//! Per-actor kinematic state: the player car, obstacles, and pickups
//!
//! All entities share the lane model: a fixed, ordered set of x-centers with
//! the index as the sole lane identity. Obstacles and pickups descend in a
//! straight line and are removed once fully past the bottom edge; the car
//! persists for the whole session and only moves horizontally between lanes.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned overlap test on centered rectangles.
pub fn aabb_overlap(a_center: Vec2, a_size: Vec2, b_center: Vec2, b_size: Vec2) -> bool {
    let a_min = a_center - a_size / 2.0;
    let a_max = a_center + a_size / 2.0;
    let b_min = b_center - b_size / 2.0;
    let b_max = b_center + b_size / 2.0;
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// The player's car. Lane changes are discrete events; the visible x position
/// interpolates toward the new lane center at constant speed.
#[derive(Debug, Clone)]
pub struct Car {
    pub lane: usize,
    pub pos: Vec2,
    pub target_x: f32,
    pub speed: f32,
    lane_positions: Vec<f32>,
}

impl Car {
    pub fn new(lane: usize, lane_positions: Vec<f32>) -> Self {
        let lane = lane.min(lane_positions.len() - 1);
        let x = lane_positions[lane];
        Self {
            lane,
            pos: Vec2::new(x, CAR_Y),
            target_x: x,
            speed: CAR_LANE_SPEED,
            lane_positions,
        }
    }

    pub fn move_left(&mut self) {
        self.set_lane(self.lane.saturating_sub(1));
    }

    pub fn move_right(&mut self) {
        self.set_lane((self.lane + 1).min(self.lane_positions.len() - 1));
    }

    pub fn set_lane(&mut self, lane: usize) {
        self.lane = lane.min(self.lane_positions.len() - 1);
        self.target_x = self.lane_positions[self.lane];
    }

    /// Move x toward the target lane center, snapping exactly onto it when
    /// the remaining distance is within one tick's travel. Never overshoots.
    pub fn update(&mut self, dt: f32) {
        let dx = self.target_x - self.pos.x;
        if dx.abs() < LANE_SNAP_EPSILON {
            self.pos.x = self.target_x;
            return;
        }
        let step = self.speed * dt * dx.signum();
        if step.abs() >= dx.abs() {
            self.pos.x = self.target_x;
        } else {
            self.pos.x += step;
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(CAR_WIDTH, CAR_HEIGHT)
    }
}

/// A traffic car descending toward the player.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub lane: usize,
    pub pos: Vec2,
    pub speed: f32,
}

impl Obstacle {
    pub fn new(lane: usize, lane_x: f32, y: f32, speed: f32) -> Self {
        Self {
            lane,
            pos: Vec2::new(lane_x, y),
            speed,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
    }

    /// True once the whole sprite has left the bottom edge.
    pub fn is_offscreen(&self, view_height: f32) -> bool {
        self.pos.y - OBSTACLE_HEIGHT / 2.0 > view_height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }
}

/// Power-up buff kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Temporary immunity to obstacle collisions
    Invuln,
    /// Doubled score accrual
    ScoreBoost,
}

/// A collectible buff drifting down a lane, slower than traffic.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub kind: PickupKind,
    pub lane: usize,
    pub pos: Vec2,
    pub speed: f32,
}

impl Pickup {
    pub fn new(kind: PickupKind, lane: usize, lane_x: f32, y: f32) -> Self {
        Self {
            kind,
            lane,
            pos: Vec2::new(lane_x, y),
            speed: PICKUP_SPEED,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
    }

    pub fn is_offscreen(&self, view_height: f32) -> bool {
        self.pos.y - PICKUP_SIZE / 2.0 > view_height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::splat(PICKUP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lanes() -> Vec<f32> {
        vec![80.0, 240.0, 400.0]
    }

    #[test]
    fn test_car_starts_on_lane_center() {
        let car = Car::new(1, lanes());
        assert_eq!(car.lane, 1);
        assert_eq!(car.pos.x, 240.0);
        assert_eq!(car.target_x, 240.0);
        assert_eq!(car.pos.y, CAR_Y);
    }

    #[test]
    fn test_car_lane_clamping() {
        let mut car = Car::new(0, lanes());
        car.move_left();
        assert_eq!(car.lane, 0);
        assert_eq!(car.target_x, 80.0);

        car.set_lane(2);
        car.move_right();
        assert_eq!(car.lane, 2);
        assert_eq!(car.target_x, 400.0);
    }

    #[test]
    fn test_car_converges_and_snaps() {
        let mut car = Car::new(0, lanes());
        car.move_right();
        // 160px at 300px/s: just over half a second
        for _ in 0..40 {
            car.update(1.0 / 60.0);
        }
        assert_eq!(car.pos.x, 240.0);
    }

    #[test]
    fn test_car_snap_epsilon() {
        let mut car = Car::new(0, lanes());
        car.pos.x = 239.5;
        car.target_x = 240.0;
        car.update(1.0 / 60.0);
        assert_eq!(car.pos.x, 240.0);
    }

    proptest! {
        #[test]
        fn prop_car_never_overshoots(dts in proptest::collection::vec(0.0f32..0.2, 1..60)) {
            let mut car = Car::new(0, lanes());
            car.move_right();
            let start = car.pos.x;
            for dt in dts {
                let before = car.pos.x;
                car.update(dt);
                // monotone toward target, never past it
                prop_assert!(car.pos.x >= before);
                prop_assert!(car.pos.x >= start && car.pos.x <= car.target_x);
            }
        }
    }

    #[test]
    fn test_obstacle_descent_and_offscreen() {
        let mut o = Obstacle::new(0, 80.0, -50.0, 120.0);
        o.update(1.0);
        assert_eq!(o.pos.y, 70.0);
        assert!(!o.is_offscreen(640.0));
        o.pos.y = 700.0;
        assert!(o.is_offscreen(640.0));
        // exactly half-out is still on screen
        o.pos.y = 640.0 + OBSTACLE_HEIGHT / 2.0;
        assert!(!o.is_offscreen(640.0));
    }

    #[test]
    fn test_pickup_descends_slower_than_traffic() {
        let mut p = Pickup::new(PickupKind::Invuln, 1, 240.0, -50.0);
        p.update(1.0);
        assert_eq!(p.pos.y, 10.0);
        assert!(!p.is_offscreen(640.0));
        p.pos.y = 700.0;
        assert!(p.is_offscreen(640.0));
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(aabb_overlap(a, Vec2::new(32.0, 48.0), Vec2::new(20.0, 20.0), Vec2::new(32.0, 48.0)));
        assert!(!aabb_overlap(a, Vec2::new(32.0, 48.0), Vec2::new(100.0, 0.0), Vec2::new(32.0, 48.0)));
        // touching edges do not overlap
        assert!(!aabb_overlap(a, Vec2::splat(10.0), Vec2::new(10.0, 0.0), Vec2::splat(10.0)));
    }
}
