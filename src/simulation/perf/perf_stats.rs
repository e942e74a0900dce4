use wasm_bindgen::prelude::*;

use super::perf_timer::Phase;

/// Per-frame timings and counters; zeros while perf metrics are disabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) body_count: u32,
    pub(super) free_bodies: u32,
    pub(super) contacts: u32,
    pub(super) wall_hits: u32,
    pub(super) sanitized: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_phase(&mut self, phase: Phase, ms: f64) {
        let slot = match phase {
            Phase::Step => &mut self.step_ms,
            Phase::Integrate => &mut self.integrate_ms,
            Phase::Collision => &mut self.collision_ms,
            Phase::Boundary => &mut self.boundary_ms,
        };
        *slot = ms;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn free_bodies(&self) -> u32 { self.free_bodies }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn sanitized(&self) -> u32 { self.sanitized }
}
