use crate::boundary::clamp_to_bounds;
use crate::collision::resolve_all;

use super::render_extract::rebuild_draw_list;
use super::{Phase, PhaseTimer, SimulationCore};

/// One frame: integrate free bodies, resolve contacts, clamp to the
/// surface, scrub non-finite state, then rebuild the draw list.
pub(super) fn step(world: &mut SimulationCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let frame_timer = PhaseTimer::start(Phase::Step, perf_on);

    for body in world.bodies.iter_mut() {
        body.save_prev_state();
    }

    // === INTEGRATION ===
    // Dragged bodies are pointer-driven and skipped here
    let timer = PhaseTimer::start(Phase::Integrate, perf_on);
    let gravity_enabled = world.settings.gravity_enabled;
    let mut free = 0u32;
    for body in world.bodies.iter_mut().filter(|b| !b.is_dragging()) {
        body.integrate(&world.settings, gravity_enabled);
        free += 1;
    }
    timer.finish(&mut world.perf_stats);

    // === BODY VS BODY ===
    // All bodies, including the dragged one, so free bodies push off it
    let timer = PhaseTimer::start(Phase::Collision, perf_on);
    let contacts = resolve_all(&mut world.bodies, &world.settings);
    timer.finish(&mut world.perf_stats);

    // === WALLS ===
    let timer = PhaseTimer::start(Phase::Boundary, perf_on);
    let bounds = world.bounds;
    let mut wall_hits = 0u32;
    for body in world.bodies.iter_mut() {
        wall_hits += clamp_to_bounds(body, bounds, &world.settings).count();
    }
    timer.finish(&mut world.perf_stats);

    // === NUMERIC GUARD ===
    let center = bounds.center();
    let mut sanitized = 0u32;
    for body in world.bodies.iter_mut() {
        if body.sanitize(center) {
            log::warn!("body {} had non-finite state; reset", body.id);
            sanitized += 1;
        }
    }

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.free_bodies = free;
        stats.contacts = contacts;
        stats.wall_hits = wall_hits;
        stats.sanitized = sanitized;
    }

    world.frame += 1;
    world.needs_redraw = true;
    rebuild_draw_list(world);

    frame_timer.finish(&mut world.perf_stats);
}
