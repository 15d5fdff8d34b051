//! Tumble Engine - 2D rigid body physics core for the Tumble sandbox
//!
//! Architecture:
//! - core/        - Errors
//! - domain/      - Shape taxonomy, handles, colours, draw commands
//! - systems/     - Rigid bodies, shapes, springs and collision handling
//! - simulation/  - Scene orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the systems everything else leans on
pub use systems::collision;
pub use systems::rigid_body;
pub use systems::shapes;
pub use systems::spring;

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

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Tumble: logger already installed".into());
        }
    }

    web_sys::console::log_1(&"Tumble WASM physics initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{PhysicsError, PhysicsResult};
pub use domain::{BodyHandle, Colour, DrawCommand, RenderBatch, ShapeType};
pub use rigid_body::{RigidBody, Vec2};
pub use shapes::{Aabb, Obb, PhysicsObject, Plane, Sphere};
pub use simulation::{PerfStats, Scene, SceneCore, SceneSettings};
pub use spring::Spring;
