use wasm_bindgen::prelude::*;

use crate::rigid_body::AlphaMask;

use super::perf_stats::PerfStats;
use super::surface::Surface;
use super::{SimulationCore, DRAW_COMMAND_WORDS};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS-facing handle. The host owns the canvas, forwards pointer events and
/// calls `tick()` from its animation-frame callback.
#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    /// Default scene on a surface of the given physical size
    #[wasm_bindgen(constructor)]
    pub fn new(physical_width: f32, physical_height: f32, device_scale: f32) -> Result<World, JsValue> {
        let surface = Surface::new(physical_width, physical_height, device_scale).map_err(js_err)?;
        let core = SimulationCore::with_default_scene(surface).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromSceneJson)]
    pub fn from_scene_json(
        json: String,
        physical_width: f32,
        physical_height: f32,
        device_scale: f32,
    ) -> Result<World, JsValue> {
        let surface = Surface::new(physical_width, physical_height, device_scale).map_err(js_err)?;
        let core = SimulationCore::from_scene_json(&json, surface).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn logical_width(&self) -> f32 { self.core.bounds().width }

    #[wasm_bindgen(getter)]
    pub fn logical_height(&self) -> f32 { self.core.bounds().height }

    #[wasm_bindgen(getter)]
    pub fn device_scale(&self) -> f32 { self.core.surface().device_scale }

    /// Surface top-left in client coordinates (from `getBoundingClientRect`)
    pub fn set_surface_offset(&mut self, left: f32, top: f32) {
        self.core.set_surface_offset(left, top);
    }

    // === SETTINGS ===

    #[wasm_bindgen(getter)]
    pub fn gravity_enabled(&self) -> bool { self.core.gravity_enabled() }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.core.set_gravity_enabled(enabled);
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.core.set_friction(friction);
    }

    pub fn set_collision_damping(&mut self, damping: f32) {
        self.core.set_collision_damping(damping);
    }

    pub fn set_wall_damping(&mut self, damping: f32) {
        self.core.set_wall_damping(damping);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === POINTER ===

    /// Returns the grabbed body id, or 0 when nothing was hit
    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) -> u32 {
        self.core.pointer_down(client_x, client_y).unwrap_or(0)
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.core.pointer_move(client_x, client_y);
    }

    /// Returns the released body id, or 0 when nothing was held
    pub fn pointer_up(&mut self) -> u32 {
        self.core.pointer_up().unwrap_or(0)
    }

    pub fn pointer_cancel(&mut self) {
        self.core.pointer_cancel();
    }

    /// Id of the held body, or 0
    pub fn dragged_body(&self) -> u32 {
        self.core.dragged_body().unwrap_or(0)
    }

    // === FRAME LOOP ===

    pub fn start(&mut self) -> bool {
        self.core.start()
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn teardown(&mut self) {
        self.core.teardown();
    }

    pub fn is_running(&self) -> bool {
        self.core.scheduler_state() == super::SchedulerState::Running
    }

    /// Call from `requestAnimationFrame`; returns whether a frame ran
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    pub fn step(&mut self) -> bool {
        self.core.step()
    }

    // === VISUALS ===

    pub fn mark_visual_ready(&mut self, id: u32, width: u32, height: u32) -> Result<(), JsValue> {
        self.core.mark_visual_ready(id, width, height).map_err(js_err)
    }

    /// One alpha byte per pixel, row-major
    pub fn set_alpha_mask(&mut self, id: u32, width: u32, height: u32, alpha: Vec<u8>) -> Result<(), JsValue> {
        let mask = AlphaMask::new(width, height, alpha).map_err(js_err)?;
        self.core.set_alpha_mask(id, mask).map_err(js_err)
    }

    /// Tightly packed RGBA as returned by `getImageData`
    pub fn set_alpha_mask_rgba(&mut self, id: u32, width: u32, height: u32, rgba: &[u8]) -> Result<(), JsValue> {
        let mask = AlphaMask::from_rgba(width, height, rgba).map_err(js_err)?;
        self.core.set_alpha_mask(id, mask).map_err(js_err)
    }

    // === RENDER ===

    /// Get pointer to the draw list (for JS rendering without copies)
    pub fn draw_list_ptr(&self) -> u32 {
        self.core.draw_list().as_ptr() as u32
    }

    /// Number of draw commands
    pub fn draw_list_len(&self) -> usize {
        self.core.draw_list().len()
    }

    /// 32-bit words per draw command
    pub fn draw_command_words(&self) -> usize {
        DRAW_COMMAND_WORDS
    }

    pub fn draw_list_json(&self) -> String {
        self.core.draw_list_json()
    }

    pub fn take_redraw(&mut self) -> bool {
        self.core.take_redraw()
    }
}

impl World {
    /// Native access to the core (tests, non-JS hosts)
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
