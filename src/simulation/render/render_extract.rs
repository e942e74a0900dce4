use serde::Serialize;

use crate::rigid_body::{RigidBody, Shape, VisualSlot};

use super::SimulationCore;

/// Fallback filled circle: extents are (radius, radius)
pub const DRAW_KIND_DISK: u32 = 0;
/// Fallback filled rectangle: extents are (width, height)
pub const DRAW_KIND_RECT: u32 = 1;
/// Decoded visual centered on (x, y): extents are the draw box
pub const DRAW_KIND_VISUAL: u32 = 2;

/// One draw call for the host, in logical surface units.
///
/// Laid out as eight 32-bit words so JS can view the list through a
/// `Uint32Array`/`Float32Array` pair without copying.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawCommand {
    pub id: u32,
    pub kind: u32,
    /// 0xRRGGBBAA
    pub color: u32,
    pub x: f32,
    pub y: f32,
    /// Degrees
    pub rotation: f32,
    pub extent_a: f32,
    pub extent_b: f32,
}

pub const DRAW_COMMAND_WORDS: usize = std::mem::size_of::<DrawCommand>() / 4;

/// Build the draw call for a body; `None` while its visual is still loading
pub fn draw_command(body: &RigidBody) -> Option<DrawCommand> {
    let (extent_a, extent_b) = match *body.shape() {
        Shape::Disk { radius } => (radius, radius),
        Shape::Sprite { width, height } => (width, height),
    };
    let kind = match (&body.visual, body.shape()) {
        (VisualSlot::Pending { .. }, _) => return None,
        (VisualSlot::Ready { .. }, _) => DRAW_KIND_VISUAL,
        (VisualSlot::None, Shape::Disk { .. }) => DRAW_KIND_DISK,
        (VisualSlot::None, Shape::Sprite { .. }) => DRAW_KIND_RECT,
    };
    // Visuals are drawn into the body's box; disks use their diameter
    let (extent_a, extent_b) = match (kind, body.shape()) {
        (DRAW_KIND_VISUAL, Shape::Disk { .. }) => (extent_a * 2.0, extent_b * 2.0),
        _ => (extent_a, extent_b),
    };
    Some(DrawCommand {
        id: body.id,
        kind,
        color: body.color,
        x: body.pos.x,
        y: body.pos.y,
        rotation: body.rotation,
        extent_a,
        extent_b,
    })
}

/// Refill the draw list in body order (later entries draw on top)
pub(super) fn rebuild_draw_list(world: &mut SimulationCore) {
    world.draw_list.clear();
    world
        .draw_list
        .extend(world.bodies.iter().filter_map(draw_command));
}

pub(super) fn draw_list_json(world: &SimulationCore) -> String {
    serde_json::to_string(&world.draw_list).unwrap_or_else(|_| "[]".to_string())
}
