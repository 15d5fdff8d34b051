use crate::shapes::{Integrate, PhysicsObject};

use super::SceneCore;

/// Advance every object by one fixed step, in insertion order.
///
/// Springs act on the velocities their bodies have at that point of the pass.
/// A spring whose endpoint is gone is switched off.
pub(super) fn integrate_all(scene: &mut SceneCore) {
    let dt = scene.fixed_timestep;
    let gravity = scene.gravity;

    for index in 0..scene.order.len() {
        let handle = scene.order[index];
        let Some(object) = scene.bodies.get_mut(handle) else {
            continue;
        };

        match object {
            PhysicsObject::Spring(spring) => {
                let spring = *spring;
                if let Err(err) = spring.apply(&mut scene.bodies, dt) {
                    log::warn!("spring {handle:?} deactivated: {err}");
                    if let Some(spring) = scene.bodies.get_mut(handle).and_then(PhysicsObject::as_spring_mut) {
                        spring.active = false;
                    }
                }
            }
            other => other.integrate(gravity, dt),
        }
    }
}
