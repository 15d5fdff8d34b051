use serde::{Deserialize, Serialize};

use crate::collision::DEFAULT_ENERGY_TOLERANCE;
use crate::core::error::{PhysicsError, PhysicsResult};
use crate::rigid_body::Vec2;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub const DEFAULT_FIXED_TIMESTEP: f32 = 0.01;

/// Scene configuration, loadable from camelCase JSON.
/// Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneSettings {
    pub gravity: Vec2,
    pub fixed_timestep: f32,
    pub energy_tolerance: f32,
    pub debug_contacts: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            gravity: Vec2::zero(),
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            energy_tolerance: DEFAULT_ENERGY_TOLERANCE,
            debug_contacts: false,
        }
    }
}

impl SceneSettings {
    pub fn from_json(json: &str) -> PhysicsResult<Self> {
        let settings: SceneSettings =
            serde_json::from_str(json).map_err(|e| PhysicsError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        check_timestep(self.fixed_timestep)?;
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidSettings("gravity must be finite".into()));
        }
        if !(self.energy_tolerance.is_finite() && self.energy_tolerance >= 0.0) {
            return Err(PhysicsError::InvalidSettings(format!(
                "energyTolerance must be >= 0, got {}",
                self.energy_tolerance
            )));
        }
        Ok(())
    }
}

fn check_timestep(seconds: f32) -> PhysicsResult<()> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidTimestep(seconds))
    }
}

pub(super) fn settings(scene: &SceneCore) -> SceneSettings {
    SceneSettings {
        gravity: scene.gravity,
        fixed_timestep: scene.fixed_timestep,
        energy_tolerance: scene.energy_tolerance,
        debug_contacts: scene.debug_contacts,
    }
}

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_gravity(scene: &mut SceneCore, gravity: Vec2) {
    scene.gravity = gravity;
}

pub(super) fn set_fixed_timestep(scene: &mut SceneCore, seconds: f32) -> PhysicsResult<()> {
    check_timestep(seconds)?;
    scene.fixed_timestep = seconds;
    Ok(())
}

pub(super) fn set_debug_contacts(scene: &mut SceneCore, enabled: bool) {
    scene.debug_contacts = enabled;
}
