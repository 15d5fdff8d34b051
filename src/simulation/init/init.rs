use crate::domain::BodyMap;

use super::perf_stats::PerfStats;
use super::settings::SceneSettings;
use super::SceneCore;

pub(super) fn create_scene_core(settings: SceneSettings) -> SceneCore {
    log::debug!(
        "scene created: gravity ({}, {}), fixed step {}s",
        settings.gravity.x,
        settings.gravity.y,
        settings.fixed_timestep
    );

    SceneCore {
        bodies: BodyMap::with_key(),
        order: Vec::new(),
        gravity: settings.gravity,
        fixed_timestep: settings.fixed_timestep,
        accumulator: 0.0,
        energy_tolerance: settings.energy_tolerance,
        debug_contacts: settings.debug_contacts,
        contacts: Vec::with_capacity(64),
        steps: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
