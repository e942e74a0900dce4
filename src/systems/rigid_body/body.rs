use crate::domain::scene::SceneError;
use crate::domain::settings::SimSettings;

use super::shape::Shape;
use super::vec2::Vec2;
use super::visual::VisualSlot;

/// Pointer capture for a body under manual control
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Pointer minus center at grab time
    pub offset: Vec2,
    /// Last pointer sample, used for the release velocity estimate
    pub last_pointer: Vec2,
}

/// Rigid Body - a draggable disk or sprite
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// Surface position of the center
    pub pos: Vec2,
    /// Velocity vector (surface units per frame)
    pub velocity: Vec2,
    /// Rotation in degrees; only sprites ever change it
    pub rotation: f32,
    /// Area-proportional mass, fixed at construction
    mass: f32,
    /// Unique ID for this body (1-based)
    pub id: u32,

    // === Shape Definition ===
    shape: Shape,

    // === Previous frame position (numeric guard fallback) ===
    pub prev_pos: Vec2,

    // === Interaction ===
    drag: Option<DragState>,
    pub tag: Option<String>,

    // === Presentation ===
    pub visual: VisualSlot,
    /// Fallback fill color, 0xRRGGBBAA
    pub color: u32,
}

impl RigidBody {
    pub fn new(id: u32, shape: Shape, pos: Vec2) -> Result<Self, SceneError> {
        if !shape.is_valid() {
            return Err(SceneError::InvalidBody {
                id,
                reason: "extents and mass must be finite and positive",
            });
        }
        if !pos.is_finite() {
            return Err(SceneError::InvalidBody {
                id,
                reason: "position must be finite",
            });
        }
        Ok(Self {
            pos,
            velocity: Vec2::zero(),
            rotation: 0.0,
            mass: shape.mass(),
            id,
            shape,
            prev_pos: pos,
            drag: None,
            tag: None,
            visual: VisualSlot::None,
            color: 0x808080FF,
        })
    }

    /// Create a disk of the given radius
    pub fn new_disk(id: u32, x: f32, y: f32, radius: f32) -> Result<Self, SceneError> {
        Self::new(id, Shape::disk(radius), Vec2::new(x, y))
    }

    /// Create a rectangular sprite rotated by `rotation` degrees
    pub fn new_sprite(
        id: u32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rotation: f32,
    ) -> Result<Self, SceneError> {
        if !rotation.is_finite() {
            return Err(SceneError::InvalidBody {
                id,
                reason: "rotation must be finite",
            });
        }
        let mut body = Self::new(id, Shape::sprite(width, height), Vec2::new(x, y))?;
        body.rotation = rotation;
        Ok(body)
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_visual(mut self, visual: VisualSlot) -> Self {
        self.visual = visual;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn rotation_radians(&self) -> f32 {
        self.rotation.to_radians()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }

    /// Collision half-extent along a unit `axis`
    pub fn effective_radius(&self, axis: Vec2) -> f32 {
        self.shape.effective_radius(axis, self.rotation_radians())
    }

    /// World-space bounding box half-extents
    pub fn half_extents(&self) -> Vec2 {
        self.shape.half_extents(self.rotation_radians())
    }

    /// Save current position as previous (call before the frame mutates it)
    pub fn save_prev_state(&mut self) {
        if self.pos.is_finite() {
            self.prev_pos = self.pos;
        }
    }

    /// Advance a free body by one frame.
    ///
    /// Dragged bodies are pointer-driven; calling this on one does nothing.
    pub fn integrate(&mut self, settings: &SimSettings, gravity_enabled: bool) {
        if self.is_dragging() {
            log::debug!("integrate skipped for dragged body {}", self.id);
            return;
        }

        if gravity_enabled {
            self.velocity.y += settings.gravity * self.mass;
        }

        self.pos += self.velocity;
        self.velocity *= settings.friction;

        // Snap micro-drift to rest
        if self.velocity.x.abs() < settings.stop_threshold {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < settings.stop_threshold {
            self.velocity.y = 0.0;
        }
    }

    /// Take pointer control. Velocity restarts from rest.
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag = Some(DragState {
            offset: pointer - self.pos,
            last_pointer: pointer,
        });
        self.velocity = Vec2::zero();
    }

    /// Follow the pointer, keeping the grab offset.
    ///
    /// Velocity is the pointer delta since the previous sample, which becomes
    /// the release velocity if the drag ends here.
    pub fn update_from_pointer(&mut self, pointer: Vec2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        self.velocity = pointer - drag.last_pointer;
        drag.last_pointer = pointer;
        self.pos = pointer - drag.offset;
    }

    /// Give the body back to the simulation.
    ///
    /// A release slower than `release_threshold` is jitter, not a throw.
    pub fn end_drag(&mut self, release_threshold: f32) {
        if self.drag.take().is_none() {
            return;
        }
        if self.velocity.length() < release_threshold {
            self.velocity = Vec2::zero();
        }
    }

    /// Drop pointer control without touching velocity
    pub(crate) fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Replace non-finite state. Returns true when anything was reset.
    pub fn sanitize(&mut self, fallback: Vec2) -> bool {
        let mut reset = false;
        if !self.velocity.x.is_finite() {
            self.velocity.x = 0.0;
            reset = true;
        }
        if !self.velocity.y.is_finite() {
            self.velocity.y = 0.0;
            reset = true;
        }
        if !self.pos.is_finite() {
            self.pos = if self.prev_pos.is_finite() { self.prev_pos } else { fallback };
            reset = true;
        }
        if !self.rotation.is_finite() {
            self.rotation = 0.0;
            reset = true;
        }
        reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk() -> RigidBody {
        RigidBody::new_disk(1, 100.0, 100.0, 20.0).unwrap()
    }

    #[test]
    fn mass_is_area_proportional() {
        let b = disk();
        assert!((b.mass() - std::f32::consts::PI * 400.0).abs() < 1e-2);
        let s = RigidBody::new_sprite(2, 0.0, 0.0, 10.0, 4.0, 0.0).unwrap();
        assert_eq!(s.mass(), 40.0);
    }

    #[test]
    fn zero_radius_is_rejected() {
        assert!(RigidBody::new_disk(1, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn degenerate_mass_is_rejected() {
        assert!(matches!(
            RigidBody::new_disk(1, 0.0, 0.0, 1e-25),
            Err(SceneError::InvalidBody { id: 1, .. })
        ));
        assert!(matches!(
            RigidBody::new_sprite(2, 0.0, 0.0, 1e20, 1e20, 0.0),
            Err(SceneError::InvalidBody { id: 2, .. })
        ));
    }

    #[test]
    fn non_finite_sprite_rotation_is_rejected() {
        assert!(matches!(
            RigidBody::new_sprite(3, 0.0, 0.0, 10.0, 10.0, f32::NAN),
            Err(SceneError::InvalidBody { id: 3, .. })
        ));
    }

    #[test]
    fn integrate_snaps_sub_threshold_velocity_to_zero() {
        let settings = SimSettings::default();
        let mut b = disk().with_velocity(Vec2::new(0.01, -0.005));
        b.integrate(&settings, false);
        assert_eq!(b.velocity, Vec2::ZERO);
    }

    #[test]
    fn integrate_applies_friction_after_moving() {
        let settings = SimSettings::default();
        let mut b = disk().with_velocity(Vec2::new(10.0, 0.0));
        b.integrate(&settings, false);
        assert_eq!(b.pos, Vec2::new(110.0, 100.0));
        assert_eq!(b.velocity.x, 10.0 * settings.friction);
    }

    #[test]
    fn gravity_scales_with_mass() {
        let settings = SimSettings::default();
        let mut small = RigidBody::new_disk(1, 0.0, 0.0, 10.0).unwrap();
        let mut large = RigidBody::new_disk(2, 0.0, 0.0, 20.0).unwrap();
        small.integrate(&settings, true);
        large.integrate(&settings, true);
        assert!(large.velocity.y > small.velocity.y);
        assert!(small.velocity.y > 0.0);
    }

    #[test]
    fn dragged_body_is_not_integrated() {
        let settings = SimSettings::default();
        let mut b = disk().with_velocity(Vec2::new(5.0, 5.0));
        b.begin_drag(Vec2::new(105.0, 100.0));
        b.velocity = Vec2::new(5.0, 5.0);
        b.integrate(&settings, true);
        assert_eq!(b.pos, Vec2::new(100.0, 100.0));
        assert_eq!(b.velocity, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn pointer_update_on_free_body_is_ignored() {
        let mut b = disk();
        b.update_from_pointer(Vec2::new(300.0, 300.0));
        assert_eq!(b.pos, Vec2::new(100.0, 100.0));
        assert_eq!(b.velocity, Vec2::ZERO);
    }

    #[test]
    fn sanitize_restores_previous_position() {
        let mut b = disk();
        b.save_prev_state();
        b.pos = Vec2::new(f32::NAN, 1.0);
        b.velocity = Vec2::new(f32::INFINITY, 2.0);
        assert!(b.sanitize(Vec2::ZERO));
        assert_eq!(b.pos, Vec2::new(100.0, 100.0));
        assert_eq!(b.velocity, Vec2::new(0.0, 2.0));
        assert!(!b.sanitize(Vec2::ZERO));
    }
}
