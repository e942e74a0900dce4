//! Simulation - the per-frame pipeline and the pointer state machine
//!
//! `SimulationCore` owns every body and is passed by reference to each
//! resolver; the host drives it with pointer calls and `tick()`:
//! - step/        - frame pipeline and loop lifecycle
//! - interaction/ - pointer down/move/up transitions and triggers
//! - render/      - draw list for the host surface
//! - init/        - scene setup, surface geometry, runtime settings

use crate::boundary::Bounds;
use crate::domain::scene::{SceneBundle, SceneError};
use crate::domain::settings::SimSettings;
use crate::rigid_body::{AlphaMask, RigidBody, Vec2};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/scheduler.rs"]
mod scheduler;
#[path = "interaction/interaction.rs"]
mod interaction;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "init/surface.rs"]
mod surface;
mod facade;

pub use facade::World;
pub use interaction::PointerState;
pub use perf_stats::PerfStats;
pub use render_extract::{
    draw_command, DrawCommand, DRAW_COMMAND_WORDS, DRAW_KIND_DISK, DRAW_KIND_RECT, DRAW_KIND_VISUAL,
};
pub use scheduler::{FrameScheduler, SchedulerState};
pub use surface::Surface;

use interaction::Trigger;
use perf_timer::{Phase, PhaseTimer};

/// The simulation state container
pub struct SimulationCore {
    bodies: Vec<RigidBody>,
    settings: SimSettings,

    // Surface
    surface: Surface,
    bounds: Bounds,

    // Interaction
    pointer: PointerState,
    triggers: Vec<Trigger>,

    // Frame loop
    scheduler: FrameScheduler,
    frame: u64,
    needs_redraw: bool,
    draw_list: Vec<DrawCommand>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Set up a session from a scene bundle
    pub fn new(scene: &SceneBundle, surface: Surface) -> Result<Self, SceneError> {
        init::create_simulation_core(scene, surface)
    }

    pub fn from_scene_json(json: &str, surface: Surface) -> Result<Self, SceneError> {
        let scene = SceneBundle::from_json(json)?;
        Self::new(&scene, surface)
    }

    pub fn with_default_scene(surface: Surface) -> Result<Self, SceneError> {
        Self::new(&SceneBundle::default_scene(), surface)
    }

    pub fn bodies(&self) -> &[RigidBody] { &self.bodies }

    pub fn body(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn bounds(&self) -> Bounds { self.bounds }

    pub fn surface(&self) -> &Surface { &self.surface }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn settings(&self) -> &SimSettings { &self.settings }

    /// Track where the surface sits on screen so client coordinates map to
    /// surface coordinates
    pub fn set_surface_offset(&mut self, left: f32, top: f32) {
        self.surface.offset = Vec2::new(left, top);
    }

    // === SETTINGS ===

    pub fn gravity_enabled(&self) -> bool {
        self.settings.gravity_enabled
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        settings::set_gravity_enabled(self, enabled);
    }

    pub fn set_friction(&mut self, friction: f32) {
        settings::set_friction(self, friction);
    }

    pub fn set_collision_damping(&mut self, damping: f32) {
        settings::set_collision_damping(self, damping);
    }

    pub fn set_wall_damping(&mut self, damping: f32) {
        settings::set_wall_damping(self, damping);
    }

    /// Replace all tunables at once (values are clamped to safe ranges)
    pub fn set_settings(&mut self, settings: SimSettings) {
        settings::set_settings(self, settings);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === POINTER ===

    /// Pointer pressed at client coordinates. Returns the grabbed body id.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<u32> {
        interaction::pointer_down(self, Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        interaction::pointer_move(self, Vec2::new(x, y));
    }

    /// Pointer released. Returns the released body id, if one was held.
    pub fn pointer_up(&mut self) -> Option<u32> {
        interaction::pointer_up(self)
    }

    pub fn pointer_cancel(&mut self) {
        interaction::pointer_cancel(self);
    }

    pub fn pointer_state(&self) -> PointerState { self.pointer }

    /// Id of the body currently under pointer control
    pub fn dragged_body(&self) -> Option<u32> {
        match self.pointer {
            PointerState::Idle => None,
            PointerState::Dragging { index } => self.bodies.get(index).map(|b| b.id),
        }
    }

    // === FRAME LOOP ===

    pub fn start(&mut self) -> bool {
        self.scheduler.start()
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Stop for good: no more frames, pointer events are ignored
    pub fn teardown(&mut self) {
        interaction::pointer_cancel(self);
        self.scheduler.teardown();
    }

    pub fn scheduler_state(&self) -> SchedulerState { self.scheduler.state() }

    /// Called once per display refresh. Runs a frame only while started.
    pub fn tick(&mut self) -> bool {
        if !self.scheduler.is_running() {
            return false;
        }
        step::step(self);
        true
    }

    /// Run one frame regardless of the loop state (never after teardown)
    pub fn step(&mut self) -> bool {
        if self.scheduler.is_torn_down() {
            return false;
        }
        step::step(self);
        true
    }

    // === VISUALS ===

    pub fn mark_visual_ready(&mut self, id: u32, width: u32, height: u32) -> Result<(), SceneError> {
        commands::mark_visual_ready(self, id, width, height)
    }

    pub fn set_alpha_mask(&mut self, id: u32, mask: AlphaMask) -> Result<(), SceneError> {
        commands::set_alpha_mask(self, id, mask)
    }

    // === RENDER ===

    pub fn draw_list(&self) -> &[DrawCommand] { &self.draw_list }

    pub fn draw_list_json(&self) -> String {
        render_extract::draw_list_json(self)
    }

    /// True once per frame that changed something worth drawing
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
