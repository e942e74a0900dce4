use crate::boundary::Bounds;
use crate::domain::scene::SceneError;
use crate::rigid_body::Vec2;

/// Drawing surface geometry, read once at setup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// Backing store size in physical pixels
    pub physical_width: f32,
    pub physical_height: f32,
    /// Physical pixels per logical unit
    pub device_scale: f32,
    /// On-screen position of the surface's top-left corner (client space)
    pub offset: Vec2,
}

impl Surface {
    pub fn new(physical_width: f32, physical_height: f32, device_scale: f32) -> Result<Self, SceneError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(physical_width) || !valid(physical_height) || !valid(device_scale) {
            return Err(SceneError::InvalidSurface {
                width: physical_width,
                height: physical_height,
                scale: device_scale,
            });
        }
        Ok(Self {
            physical_width,
            physical_height,
            device_scale,
            offset: Vec2::zero(),
        })
    }

    /// Simulation extent: physical size divided by device scale
    pub fn logical_bounds(&self) -> Bounds {
        Bounds::new(
            self.physical_width / self.device_scale,
            self.physical_height / self.device_scale,
        )
    }

    /// Client-space pointer position to surface-local coordinates
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.offset
    }
}
