//! RigidBody - a draggable shape that moves as a unit
//!
//! The body stores its outline in local coordinates (centered at 0,0) and
//! places it in the surface using position and rotation.

mod vec2;
mod shape;
mod visual;
mod body;

pub use vec2::Vec2;
pub use shape::Shape;
pub use visual::{AlphaMask, OpacitySampler, VisualSlot};
pub use body::{DragState, RigidBody};
