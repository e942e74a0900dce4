//! Wall containment against the drawing surface rectangle.

use crate::domain::settings::SimSettings;
use crate::rigid_body::{RigidBody, Vec2};

/// Logical surface extent (physical pixels divided by device scale)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Which edges a body crossed this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    pub fn count(&self) -> u32 {
        self.left as u32 + self.right as u32 + self.top as u32 + self.bottom as u32
    }
}

/// Clamp a free body inside `bounds` and reflect the velocity that carried
/// it out.
///
/// Dragged bodies are left where the pointer put them; they are corrected on
/// the first frame after release.
pub fn clamp_to_bounds(body: &mut RigidBody, bounds: Bounds, settings: &SimSettings) -> WallHits {
    if body.is_dragging() {
        return WallHits::default();
    }

    let hits = clamp_position(body, bounds);
    if !hits.any() {
        return hits;
    }

    // Every crossing flips the component on the crossed axis
    if hits.left || hits.right {
        body.velocity.x = -body.velocity.x * settings.wall_damping;
    }
    if hits.top || hits.bottom {
        body.velocity.y = -body.velocity.y * settings.wall_damping;
    }

    if body.shape().is_sprite() {
        let before = body.rotation;
        if hits.left || hits.right {
            body.rotation += settings.wall_spin * signum_or_zero(body.velocity.y);
        }
        if hits.top {
            body.rotation += settings.wall_spin * signum_or_zero(body.velocity.x);
        }
        if hits.bottom {
            body.rotation += (settings.rest_angle - body.rotation) * settings.rotation_relax;
        }
        if body.rotation != before {
            // New orientation changes the bounding box
            clamp_position(body, bounds);
        }
    }

    if hits.bottom {
        body.velocity.x *= settings.floor_friction;
    }

    hits
}

fn clamp_position(body: &mut RigidBody, bounds: Bounds) -> WallHits {
    let half = body.half_extents();
    let mut hits = WallHits::default();

    if half.x * 2.0 >= bounds.width {
        hits.left = body.pos.x - half.x < 0.0;
        hits.right = body.pos.x + half.x > bounds.width;
        body.pos.x = bounds.width * 0.5;
    } else if body.pos.x - half.x < 0.0 {
        body.pos.x = half.x;
        hits.left = true;
    } else if body.pos.x + half.x > bounds.width {
        body.pos.x = bounds.width - half.x;
        hits.right = true;
    }

    if half.y * 2.0 >= bounds.height {
        hits.top = body.pos.y - half.y < 0.0;
        hits.bottom = body.pos.y + half.y > bounds.height;
        body.pos.y = bounds.height * 0.5;
    } else if body.pos.y - half.y < 0.0 {
        body.pos.y = half.y;
        hits.top = true;
    } else if body.pos.y + half.y > bounds.height {
        body.pos.y = bounds.height - half.y;
        hits.bottom = true;
    }

    hits
}

fn signum_or_zero(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
