use crate::domain::{Colour, RenderBatch};
use crate::shapes::{PhysicsObject, Render};

use super::SceneCore;

const CONTACT_MARKER_RADIUS: f32 = 2.0;
const CONTACT_NORMAL_LENGTH: f32 = 10.0;

/// Draw every object in insertion order, then the latest contacts if enabled
pub(super) fn render(scene: &SceneCore, batch: &mut RenderBatch) {
    for handle in &scene.order {
        match scene.bodies.get(*handle) {
            Some(PhysicsObject::Spring(spring)) => spring.render(&scene.bodies, batch),
            Some(object) => object.render(batch),
            None => {}
        }
    }

    if scene.debug_contacts {
        for contact in &scene.contacts {
            batch.circle(contact.point, CONTACT_MARKER_RADIUS, Colour::RED);
            batch.line(
                contact.point,
                contact.point + contact.normal * CONTACT_NORMAL_LENGTH,
                Colour::RED,
            );
        }
    }
}

pub(super) fn render_json(scene: &SceneCore) -> String {
    let mut batch = RenderBatch::new();
    render(scene, &mut batch);
    batch.to_json()
}
