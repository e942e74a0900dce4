use crate::domain::scene::SceneError;
use crate::rigid_body::{AlphaMask, RigidBody};

use super::render_extract::rebuild_draw_list;
use super::SimulationCore;

fn body_mut(world: &mut SimulationCore, id: u32) -> Result<&mut RigidBody, SceneError> {
    world
        .bodies
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(SceneError::UnknownBody { id })
}

/// Host finished decoding a body's visual
pub(super) fn mark_visual_ready(world: &mut SimulationCore, id: u32, width: u32, height: u32) -> Result<(), SceneError> {
    let body = body_mut(world, id)?;
    body.visual.mark_ready(width, height);
    log::debug!("visual ready: body {id} ({width}x{height})");
    rebuild_draw_list(world);
    world.needs_redraw = true;
    Ok(())
}

/// Attach an opacity mask used to refine sprite hit-testing
pub(super) fn set_alpha_mask(world: &mut SimulationCore, id: u32, mask: AlphaMask) -> Result<(), SceneError> {
    let body = body_mut(world, id)?;
    body.visual.attach_mask(mask);
    rebuild_draw_list(world);
    world.needs_redraw = true;
    Ok(())
}
