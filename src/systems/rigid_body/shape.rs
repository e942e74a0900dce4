use super::vec2::Vec2;

/// Body outline. Fixed for the body's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Disk { radius: f32 },
    /// Axis-aligned in local space; world orientation comes from the body's rotation
    Sprite { width: f32, height: f32 },
}

impl Shape {
    pub fn disk(radius: f32) -> Self {
        Shape::Disk { radius }
    }

    pub fn sprite(width: f32, height: f32) -> Self {
        Shape::Sprite { width, height }
    }

    /// All extents finite and strictly positive, and so is the mass they
    /// produce (tiny extents underflow to 0, huge ones overflow to inf)
    pub fn is_valid(&self) -> bool {
        let extents_ok = match *self {
            Shape::Disk { radius } => radius.is_finite() && radius > 0.0,
            Shape::Sprite { width, height } => {
                width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
            }
        };
        let mass = self.mass();
        extents_ok && mass.is_finite() && mass > 0.0
    }

    /// Area-proportional mass
    pub fn mass(&self) -> f32 {
        match *self {
            Shape::Disk { radius } => std::f32::consts::PI * radius * radius,
            Shape::Sprite { width, height } => width * height,
        }
    }

    pub fn is_sprite(&self) -> bool {
        matches!(self, Shape::Sprite { .. })
    }

    /// Half-extent projected on a unit `axis`, given the rotation in radians.
    ///
    /// Sprites use the projection of their rotated half-extents rather than a
    /// true polygon test.
    pub fn effective_radius(&self, axis: Vec2, rotation: f32) -> f32 {
        match *self {
            Shape::Disk { radius } => radius,
            Shape::Sprite { width, height } => {
                let u = Vec2::from_angle(rotation);
                let v = u.perp();
                axis.dot(u).abs() * width * 0.5 + axis.dot(v).abs() * height * 0.5
            }
        }
    }

    /// Half-extents of the world-space bounding box
    pub fn half_extents(&self, rotation: f32) -> Vec2 {
        match *self {
            Shape::Disk { radius } => Vec2::new(radius, radius),
            Shape::Sprite { .. } => Vec2::new(
                self.effective_radius(Vec2::UNIT_X, rotation),
                self.effective_radius(Vec2::new(0.0, 1.0), rotation),
            ),
        }
    }
}
