use super::{PerfTimer, SceneCore};

/// Upper bound on fixed steps a single `update` may run. Time beyond it is dropped.
pub(super) const MAX_STEPS_PER_UPDATE: u32 = 1024;

/// Feed a frame delta into the accumulator and run as many fixed steps as it covers.
///
/// The remainder carries over to the next call.
pub(super) fn update(scene: &mut SceneCore, delta_seconds: f32) {
    if !(delta_seconds.is_finite() && delta_seconds >= 0.0) {
        log::warn!("update ignored: invalid frame delta {delta_seconds}");
        return;
    }

    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
    }
    let update_start = if perf_on { Some(PerfTimer::start()) } else { None };

    scene.accumulator += delta_seconds;
    let mut ran = 0;
    while scene.accumulator >= scene.fixed_timestep && ran < MAX_STEPS_PER_UPDATE {
        step_fixed(scene);
        scene.accumulator -= scene.fixed_timestep;
        ran += 1;
    }

    if scene.accumulator >= scene.fixed_timestep {
        let dropped = scene.accumulator - scene.accumulator.rem_euclid(scene.fixed_timestep);
        log::warn!("update fell behind: dropping {dropped}s after {ran} steps");
        scene.accumulator = scene.accumulator.rem_euclid(scene.fixed_timestep);
    }

    if let Some(t0) = update_start {
        scene.perf_stats.update_ms = t0.elapsed_ms();
        scene.perf_stats.body_count = scene.order.len() as u32;
        scene.perf_stats.spring_count = scene.spring_count() as u32;
    }
}

/// One fixed step: integrate everything, then sweep every pair once
pub(super) fn step_fixed(scene: &mut SceneCore) {
    let perf_on = scene.perf_enabled;

    if perf_on {
        let t0 = PerfTimer::start();
        scene.integrate_all();
        scene.perf_stats.integrate_ms += t0.elapsed_ms();
    } else {
        scene.integrate_all();
    }

    let sweep = if perf_on {
        let t0 = PerfTimer::start();
        let sweep = scene.collide_all();
        scene.perf_stats.collide_ms += t0.elapsed_ms();
        sweep
    } else {
        scene.collide_all()
    };

    scene.steps += 1;

    if perf_on {
        let stats = &mut scene.perf_stats;
        stats.steps += 1;
        stats.pair_tests += sweep.pair_tests;
        stats.contacts += scene.contacts.len() as u32;
        stats.resolutions += sweep.context.resolutions;
        stats.energy_anomalies += sweep.context.anomalies;
    }
}
