use crate::shapes::{PhysicsObject, Sphere};

use super::{Collider, CollisionContext, Contact};

/// Contact when the centres are no further apart than the summed radii
pub fn sphere_sphere_contact(a: &Sphere, b: &Sphere) -> Option<Contact> {
    let delta = b.body.pos - a.body.pos;
    let distance = delta.length();
    let reach = a.radius + b.radius;
    if distance > reach {
        return None;
    }

    let normal = delta.normalize();
    Some(Contact {
        point: a.body.pos + normal * a.radius,
        normal,
        penetration: reach - distance,
    })
}

pub(super) fn sphere_sphere(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let (PhysicsObject::Sphere(first), PhysicsObject::Sphere(second)) = (a, b) else {
        return None;
    };
    let contact = sphere_sphere_contact(first, second)?;
    ctx.resolve(&mut first.body, Collider::Body(&mut second.body), &contact);
    Some(contact)
}
