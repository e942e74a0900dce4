//! Dragbox Engine - draggable rigid-body toy simulation in WASM
//!
//! Architecture:
//! - domain/     - scene bundle (JSON) and simulation settings
//! - systems/    - bodies, hit testing, collision and wall resolvers
//! - simulation/ - frame pipeline, pointer state machine, JS facade

pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths for internal/external callers)
pub use systems::boundary;
pub use systems::collision;
pub use systems::hit_test;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // A second init (e.g. a remounted host component) keeps the first logger
        let _ = console_log::init_with_level(log::Level::Info);
        web_sys::console::log_1(&"Dragbox WASM Engine initialized".into());
    }
    log::info!("dragbox engine {}", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Built-in scene as JSON, a starting point for custom scenes
#[wasm_bindgen]
pub fn default_scene_json() -> String {
    domain::scene::SceneBundle::default_scene().to_json()
}

// Re-export main types
pub use domain::scene::{SceneBundle, SceneError};
pub use domain::settings::SimSettings;
pub use rigid_body::{RigidBody, Shape, Vec2};
pub use simulation::{SimulationCore, Surface, World};
