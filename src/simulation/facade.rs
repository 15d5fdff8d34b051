use wasm_bindgen::prelude::*;

use crate::core::error::PhysicsError;
use crate::domain::BodyHandle;
use crate::rigid_body::{RigidBody, Vec2};
use crate::shapes::{Aabb, Obb, Plane, Sphere};
use crate::spring::Spring;

use super::perf_stats::PerfStats;
use super::SceneCore;

fn js_error(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn body(x: f32, y: f32, vx: f32, vy: f32, mass: f32, elasticity: f32, kinematic: bool) -> RigidBody {
    RigidBody::new(Vec2::new(x, y), mass)
        .with_velocity(Vec2::new(vx, vy))
        .with_elasticity(elasticity)
        .with_kinematic(kinematic)
}

/// Browser-facing scene. Body ids are slotmap handles packed into `u64`.
#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Scene {
    /// Empty scene, zero gravity, 0.01s fixed step
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SceneCore::new() }
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: String) -> Result<Scene, JsValue> {
        let core = SceneCore::from_settings_json(&json).map_err(js_error)?;
        Ok(Self { core })
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn steps_run(&self) -> u64 { self.core.steps_run() }

    /// Enable or disable per-update perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last update perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    pub fn set_debug_contacts(&mut self, enabled: bool) {
        self.core.set_debug_contacts(enabled);
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(Vec2::new(x, y));
    }

    pub fn set_fixed_timestep(&mut self, seconds: f32) -> Result<(), JsValue> {
        self.core.set_fixed_timestep(seconds).map_err(js_error)
    }

    // === BODIES ===

    #[allow(clippy::too_many_arguments)]
    pub fn add_sphere(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        radius: f32,
        mass: f32,
        elasticity: f32,
        kinematic: bool,
    ) -> Result<u64, JsValue> {
        let sphere = Sphere::new(body(x, y, vx, vy, mass, elasticity, kinematic), radius);
        self.core.add_body(sphere).map(BodyHandle::to_bits).map_err(js_error)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_aabb(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        width: f32,
        height: f32,
        mass: f32,
        elasticity: f32,
        kinematic: bool,
    ) -> Result<u64, JsValue> {
        let aabb = Aabb::new(body(x, y, vx, vy, mass, elasticity, kinematic), width, height);
        self.core.add_body(aabb).map(BodyHandle::to_bits).map_err(js_error)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_obb(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        angle: f32,
        angular_vel: f32,
        width: f32,
        height: f32,
        mass: f32,
        elasticity: f32,
        kinematic: bool,
    ) -> Result<u64, JsValue> {
        let rigid = body(x, y, vx, vy, mass, elasticity, kinematic)
            .with_angle(angle)
            .with_angular_velocity(angular_vel);
        let obb = Obb::new(rigid, width, height);
        self.core.add_body(obb).map(BodyHandle::to_bits).map_err(js_error)
    }

    /// Plane `dot(p, (nx, ny)) = distance`
    pub fn add_plane(&mut self, nx: f32, ny: f32, distance: f32) -> Result<u64, JsValue> {
        let plane = Plane::new(Vec2::new(nx, ny), distance).map_err(js_error)?;
        self.core.add_body(plane).map(BodyHandle::to_bits).map_err(js_error)
    }

    /// Spring between the centres of two bodies (or pinned to its start
    /// position when `body_b` is absent)
    pub fn add_spring(
        &mut self,
        body_a: u64,
        body_b: Option<u64>,
        stiffness: f32,
        rest_length: f32,
        damping: f32,
    ) -> Result<u64, JsValue> {
        let a = BodyHandle::from_bits(body_a);
        let b = body_b.map(BodyHandle::from_bits);
        let mut spring = Spring::new(a, b, stiffness)
            .with_rest_length(rest_length)
            .with_damping(damping);
        if b.is_none() {
            if let Some(anchor) = self.core.body(a).and_then(|o| o.rigid_body()).map(|r| r.pos) {
                spring = spring.with_contacts(Vec2::zero(), anchor);
            }
        }
        self.core.add_body(spring).map(BodyHandle::to_bits).map_err(js_error)
    }

    /// Returns false if the id is unknown
    pub fn remove_body(&mut self, id: u64) -> bool {
        self.core.remove_body(BodyHandle::from_bits(id)).is_some()
    }

    /// `[x, y, angle, vx, vy, angular_vel]`, or undefined for planes, springs
    /// and unknown ids
    pub fn body_state(&self, id: u64) -> Option<Vec<f32>> {
        let rigid = self.core.body(BodyHandle::from_bits(id))?.rigid_body()?;
        Some(vec![
            rigid.pos.x,
            rigid.pos.y,
            rigid.angle,
            rigid.velocity.x,
            rigid.velocity.y,
            rigid.angular_vel,
        ])
    }

    /// `[x, y]` of a rigid body
    pub fn body_position(&self, id: u64) -> Option<Vec<f32>> {
        let rigid = self.core.body(BodyHandle::from_bits(id))?.rigid_body()?;
        Some(vec![rigid.pos.x, rigid.pos.y])
    }

    // === INTERACTION ===

    pub fn query_point_owner(&self, x: f32, y: f32) -> Option<u64> {
        self.core.query_point_owner(Vec2::new(x, y)).map(BodyHandle::to_bits)
    }

    /// Attach a drag spring to whatever is under the pointer.
    /// Returns the spring id; release by removing it.
    pub fn grab(&mut self, x: f32, y: f32, stiffness: f32, damping: f32) -> Result<Option<u64>, JsValue> {
        let spring = self
            .core
            .attach_pointer_spring(Vec2::new(x, y), stiffness, damping)
            .map_err(js_error)?;
        Ok(spring.map(BodyHandle::to_bits))
    }

    pub fn drag_to(&mut self, spring: u64, x: f32, y: f32) -> Result<(), JsValue> {
        self.core
            .move_pointer_spring(BodyHandle::from_bits(spring), Vec2::new(x, y))
            .map_err(js_error)
    }

    // === SIMULATION ===

    /// Advance by a frame delta in seconds
    pub fn update(&mut self, delta_seconds: f32) {
        self.core.update(delta_seconds);
    }

    /// Draw commands for the current state as a JSON array
    pub fn render_json(&self) -> String {
        self.core.render_json()
    }
}

impl Scene {
    pub fn core(&self) -> &SceneCore {
        &self.core
    }
}
