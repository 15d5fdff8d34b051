use crate::core::error::{PhysicsError, PhysicsResult};
use crate::domain::BodyHandle;
use crate::rigid_body::Vec2;
use crate::shapes::{ContainsPoint, PhysicsObject};
use crate::spring::{rigid, Spring};

use super::SceneCore;

pub(super) fn add_body(scene: &mut SceneCore, object: PhysicsObject) -> PhysicsResult<BodyHandle> {
    object.validate()?;
    if let PhysicsObject::Spring(spring) = &object {
        rigid(&scene.bodies, spring.body_a)?;
        if let Some(handle) = spring.body_b {
            rigid(&scene.bodies, handle)?;
        }
    }

    let shape = object.shape_type();
    let handle = scene.bodies.insert(object);
    scene.order.push(handle);
    log::debug!("added {shape:?} {handle:?} ({} objects)", scene.order.len());
    Ok(handle)
}

/// Erase from the arena and the sweep order together; springs attached to the
/// removed body are switched off.
pub(super) fn remove_body(scene: &mut SceneCore, handle: BodyHandle) -> Option<PhysicsObject> {
    let removed = scene.bodies.remove(handle)?;
    scene.order.retain(|h| *h != handle);

    if removed.rigid_body().is_some() {
        for (spring_handle, object) in scene.bodies.iter_mut() {
            if let PhysicsObject::Spring(spring) = object {
                let attached = spring.body_a == handle || spring.body_b == Some(handle);
                if attached && spring.active {
                    spring.active = false;
                    log::debug!("spring {spring_handle:?} lost endpoint {handle:?}");
                }
            }
        }
    }

    log::debug!("removed {:?} {handle:?}", removed.shape_type());
    Some(removed)
}

/// First object in insertion order whose shape contains `point`
pub(super) fn query_point_owner(scene: &SceneCore, point: Vec2) -> Option<BodyHandle> {
    scene
        .order
        .iter()
        .copied()
        .find(|handle| scene.bodies.get(*handle).is_some_and(|object| object.contains_point(point)))
}

/// Pick the body under `point` and tie it to `point` with a spring whose
/// second end is a free world point. Returns the spring's handle.
pub(super) fn attach_pointer_spring(
    scene: &mut SceneCore,
    point: Vec2,
    stiffness: f32,
    damping: f32,
) -> PhysicsResult<Option<BodyHandle>> {
    let Some(target) = query_point_owner(scene, point) else {
        return Ok(None);
    };
    let local = rigid(&scene.bodies, target)?.to_local(point);
    let spring = Spring::new(target, None, stiffness)
        .with_damping(damping)
        .with_contacts(local, point);
    add_body(scene, spring.into()).map(Some)
}

/// Move the free end of a pointer spring
pub(super) fn move_pointer_spring(
    scene: &mut SceneCore,
    handle: BodyHandle,
    point: Vec2,
) -> PhysicsResult<()> {
    let spring = scene
        .bodies
        .get_mut(handle)
        .ok_or(PhysicsError::UnknownBody(handle))?
        .as_spring_mut()
        .filter(|spring| spring.body_b.is_none())
        .ok_or(PhysicsError::NotAPointerSpring(handle))?;
    spring.contact_b = point;
    Ok(())
}
