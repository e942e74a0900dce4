use serde::{Deserialize, Serialize};

/// Tunables for the per-frame pipeline.
///
/// Velocities are in surface units per frame, so every factor here is
/// applied once per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimSettings {
    /// Velocity multiplier applied after each integration step (< 1)
    pub friction: f32,
    /// Components with a smaller magnitude are snapped to zero
    pub stop_threshold: f32,
    /// Release speeds below this are treated as jitter and dropped
    pub release_threshold: f32,
    /// Vertical velocity gained per frame per unit of mass
    pub gravity: f32,
    pub gravity_enabled: bool,
    /// Multiplier on post-collision velocities (1.0 = elastic)
    pub collision_damping: f32,
    /// Multiplier on the reflected velocity component at a wall
    pub wall_damping: f32,
    /// Horizontal velocity multiplier when a body lands on the bottom edge
    pub floor_friction: f32,
    /// Fraction of the gap to `rest_angle` closed per landing frame
    pub rotation_relax: f32,
    /// Resting sprite rotation in degrees
    pub rest_angle: f32,
    /// Degrees a sprite turns when it bounces off a side or top wall
    pub wall_spin: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            friction: 0.98,
            stop_threshold: 0.01,
            release_threshold: 1.0,
            gravity: 0.0002,
            gravity_enabled: false,
            collision_damping: 1.0,
            wall_damping: 1.0,
            floor_friction: 1.0,
            rotation_relax: 0.2,
            rest_angle: 0.0,
            wall_spin: 0.0,
        }
    }
}

impl SimSettings {
    /// Clamp factors into ranges that cannot add energy or produce NaN
    pub fn sanitized(mut self) -> Self {
        let unit = |v: f32, fallback: f32| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                fallback
            }
        };
        let defaults = Self::default();
        self.friction = unit(self.friction, defaults.friction);
        self.collision_damping = unit(self.collision_damping, defaults.collision_damping);
        self.wall_damping = unit(self.wall_damping, defaults.wall_damping);
        self.floor_friction = unit(self.floor_friction, defaults.floor_friction);
        self.rotation_relax = unit(self.rotation_relax, defaults.rotation_relax);
        let non_negative = |v: f32, fallback: f32| {
            if v.is_finite() {
                v.max(0.0)
            } else {
                fallback
            }
        };
        self.stop_threshold = non_negative(self.stop_threshold, defaults.stop_threshold);
        self.release_threshold = non_negative(self.release_threshold, defaults.release_threshold);
        if !self.gravity.is_finite() {
            self.gravity = defaults.gravity;
        }
        if !self.rest_angle.is_finite() {
            self.rest_angle = defaults.rest_angle;
        }
        if !self.wall_spin.is_finite() {
            self.wall_spin = defaults.wall_spin;
        }
        self
    }
}
