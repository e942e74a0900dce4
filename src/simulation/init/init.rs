use crate::domain::scene::{SceneBundle, SceneError};

use super::interaction::{PointerState, Trigger};
use super::perf_stats::PerfStats;
use super::render_extract::rebuild_draw_list;
use super::scheduler::FrameScheduler;
use super::surface::Surface;
use super::SimulationCore;

pub(super) fn create_simulation_core(scene: &SceneBundle, surface: Surface) -> Result<SimulationCore, SceneError> {
    let bodies = scene.build_bodies()?;
    let triggers = scene.triggers.iter().cloned().map(Trigger::new).collect();
    let bounds = surface.logical_bounds();

    let mut core = SimulationCore {
        draw_list: Vec::with_capacity(bodies.len()),
        bodies,
        settings: scene.settings.clone().sanitized(),
        surface,
        bounds,
        pointer: PointerState::Idle,
        triggers,
        scheduler: FrameScheduler::new(),
        frame: 0,
        needs_redraw: true,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    rebuild_draw_list(&mut core);

    log::info!(
        "scene loaded: {} bodies, {} triggers, surface {}x{}",
        core.bodies.len(),
        core.triggers.len(),
        bounds.width,
        bounds.height
    );
    Ok(core)
}
