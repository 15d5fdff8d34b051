//! Scene - owns every body and drives the fixed-timestep loop
//!
//! The scene only orchestrates; the work lives in small modules:
//! - step/      accumulator loop, integration pass, collision sweep
//! - commands/  adding, removing and picking bodies, pointer springs
//! - render/    draw command extraction
//! - init/      construction and settings

use crate::collision::Contact;
use crate::core::error::PhysicsResult;
use crate::domain::{BodyHandle, BodyMap, RenderBatch};
use crate::rigid_body::Vec2;
use crate::shapes::PhysicsObject;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/collide.rs"]
mod collide;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Scene;
pub use perf_stats::PerfStats;
pub use settings::{SceneSettings, DEFAULT_FIXED_TIMESTEP};

use collide::SweepStats;
use perf_timer::PerfTimer;

/// The physics scene
pub struct SceneCore {
    bodies: BodyMap,
    /// Insertion order, which is also the sweep order
    order: Vec<BodyHandle>,

    // Settings
    gravity: Vec2,
    fixed_timestep: f32,
    energy_tolerance: f32,
    debug_contacts: bool,

    // State
    accumulator: f32,
    contacts: Vec<Contact>,
    steps: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for SceneCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCore {
    /// Zero gravity, 0.01s fixed step
    pub fn new() -> Self {
        init::create_scene_core(SceneSettings::default())
    }

    pub fn with_settings(settings: SceneSettings) -> PhysicsResult<Self> {
        settings.validate()?;
        Ok(init::create_scene_core(settings))
    }

    pub fn from_settings_json(json: &str) -> PhysicsResult<Self> {
        Self::with_settings(SceneSettings::from_json(json)?)
    }

    pub fn settings(&self) -> SceneSettings {
        settings::settings(self)
    }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn fixed_timestep(&self) -> f32 { self.fixed_timestep }

    /// Time carried over to the next `update`
    pub fn accumulator(&self) -> f32 { self.accumulator }

    /// Fixed steps run since creation
    pub fn steps_run(&self) -> u64 { self.steps }

    pub fn body_count(&self) -> usize { self.order.len() }

    pub fn spring_count(&self) -> usize {
        self.bodies.values().filter(|object| object.as_spring().is_some()).count()
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_fixed_timestep(&mut self, seconds: f32) -> PhysicsResult<()> {
        settings::set_fixed_timestep(self, seconds)
    }

    pub fn set_debug_contacts(&mut self, enabled: bool) {
        settings::set_debug_contacts(self, enabled);
    }

    /// Enable or disable per-update perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last update's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODIES ===

    /// Validate and insert an object at the end of the sweep order.
    /// Springs must reference rigid bodies already in the scene.
    pub fn add_body(&mut self, object: impl Into<PhysicsObject>) -> PhysicsResult<BodyHandle> {
        commands::add_body(self, object.into())
    }

    /// Remove an object; a stale handle is a no-op returning `None`
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<PhysicsObject> {
        commands::remove_body(self, handle)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&PhysicsObject> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut PhysicsObject> {
        self.bodies.get_mut(handle)
    }

    /// Objects in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &PhysicsObject)> + '_ {
        self.order
            .iter()
            .filter_map(move |handle| self.bodies.get(*handle).map(|object| (*handle, object)))
    }

    /// First object, in insertion order, containing `point`
    pub fn query_point_owner(&self, point: Vec2) -> Option<BodyHandle> {
        commands::query_point_owner(self, point)
    }

    /// Attach a spring from the body under `point` to the point itself.
    /// Returns the spring's handle, or `None` if nothing is there.
    pub fn attach_pointer_spring(
        &mut self,
        point: Vec2,
        stiffness: f32,
        damping: f32,
    ) -> PhysicsResult<Option<BodyHandle>> {
        commands::attach_pointer_spring(self, point, stiffness, damping)
    }

    pub fn move_pointer_spring(&mut self, spring: BodyHandle, point: Vec2) -> PhysicsResult<()> {
        commands::move_pointer_spring(self, spring, point)
    }

    // === SIMULATION ===

    /// Advance by a frame delta in seconds
    pub fn update(&mut self, delta_seconds: f32) {
        step::update(self, delta_seconds);
    }

    /// Contacts found during the latest fixed step
    pub fn last_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    // === RENDERING ===

    pub fn render(&self, batch: &mut RenderBatch) {
        render_extract::render(self, batch);
    }

    pub fn render_json(&self) -> String {
        render_extract::render_json(self)
    }
}

// Private simulation methods
impl SceneCore {
    fn integrate_all(&mut self) {
        integrate::integrate_all(self);
    }

    fn collide_all(&mut self) -> SweepStats {
        collide::collide_all(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
