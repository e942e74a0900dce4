use crate::domain::settings::SimSettings;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(world: &mut SimulationCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &SimulationCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity_enabled(world: &mut SimulationCore, enabled: bool) {
    world.settings.gravity_enabled = enabled;
}

pub(super) fn set_friction(world: &mut SimulationCore, friction: f32) {
    world.settings = SimSettings {
        friction,
        ..world.settings.clone()
    }
    .sanitized();
}

pub(super) fn set_collision_damping(world: &mut SimulationCore, damping: f32) {
    world.settings = SimSettings {
        collision_damping: damping,
        ..world.settings.clone()
    }
    .sanitized();
}

pub(super) fn set_wall_damping(world: &mut SimulationCore, damping: f32) {
    world.settings = SimSettings {
        wall_damping: damping,
        ..world.settings.clone()
    }
    .sanitized();
}

pub(super) fn set_settings(world: &mut SimulationCore, settings: SimSettings) {
    world.settings = settings.sanitized();
}
