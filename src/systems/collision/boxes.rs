//! Detectors between boxes, and between boxes and spheres.
//!
//! Axis-aligned boxes only collide with planes and spheres. Box/box pairs that
//! involve an AABB always report no contact.

use crate::rigid_body::Vec2;
use crate::shapes::{Aabb, CornerProbe, Obb, PhysicsObject, Sphere};

use super::{Collider, CollisionContext, Contact};

/// Closest box point to the sphere centre, tested in world axes.
///
/// The normal is built from the faces the centre lies on or beyond (both axes
/// at a corner), so it stays axis aligned on the faces. A centre strictly
/// inside the box yields a zero normal.
pub fn aabb_sphere_contact(aabb: &Aabb, sphere: &Sphere) -> Option<Contact> {
    let centre = sphere.body.pos;
    let (min, max) = (aabb.min(), aabb.max());
    let closest = centre.clamp(min, max);
    let distance = closest.distance(centre);
    if distance >= sphere.radius {
        return None;
    }

    let mut normal = Vec2::zero();
    if centre.x >= max.x {
        normal.x += 1.0;
    }
    if centre.x <= min.x {
        normal.x -= 1.0;
    }
    if centre.y >= max.y {
        normal.y += 1.0;
    }
    if centre.y <= min.y {
        normal.y -= 1.0;
    }

    Some(Contact {
        point: closest,
        normal: normal.normalize(),
        penetration: sphere.radius - distance,
    })
}

/// Closest box point to the sphere centre, tested in the box frame
pub fn obb_sphere_contact(obb: &Obb, sphere: &Sphere) -> Option<Contact> {
    let centre = sphere.body.pos;
    let local = obb.body.to_local(centre).clamp(-obb.extents, obb.extents);
    let closest = obb.body.to_world(local);
    let distance = closest.distance(centre);
    if distance >= sphere.radius {
        return None;
    }

    Some(Contact {
        point: closest,
        normal: (centre - closest).normalize(),
        penetration: sphere.radius - distance,
    })
}

/// Corner containment from both boxes' points of view.
///
/// The shallowest face wins; a face of `b` is flipped so the normal always
/// points from `a` to `b`. The contact is the mean of every perspective that
/// found contained corners.
pub fn obb_obb_contact(a: &Obb, b: &Obb) -> Option<Contact> {
    let mut probe = CornerProbe::default();
    let mut normal = Vec2::zero();

    if a.probe_corners(b, &mut probe) {
        normal = probe.normal;
    }
    if b.probe_corners(a, &mut probe) {
        normal = -probe.normal;
    }

    if probe.penetration <= 0.0 || probe.contributors == 0 {
        return None;
    }

    Some(Contact {
        point: probe.contact_sum / probe.contributors as f32,
        normal,
        penetration: probe.penetration,
    })
}

pub(super) fn aabb_sphere(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let (PhysicsObject::Aabb(aabb), PhysicsObject::Sphere(sphere)) = (a, b) else {
        return None;
    };
    let contact = aabb_sphere_contact(aabb, sphere)?;
    ctx.resolve(&mut aabb.body, Collider::Body(&mut sphere.body), &contact);
    aabb.body.angular_vel = 0.0;
    Some(contact)
}

pub(super) fn sphere_aabb(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    aabb_sphere(b, a, ctx).map(Contact::flipped)
}

pub(super) fn obb_sphere(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let (PhysicsObject::Obb(obb), PhysicsObject::Sphere(sphere)) = (a, b) else {
        return None;
    };
    let contact = obb_sphere_contact(obb, sphere)?;
    ctx.resolve(&mut obb.body, Collider::Body(&mut sphere.body), &contact);
    Some(contact)
}

pub(super) fn sphere_obb(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    obb_sphere(b, a, ctx).map(Contact::flipped)
}

pub(super) fn obb_obb(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let (PhysicsObject::Obb(first), PhysicsObject::Obb(second)) = (a, b) else {
        return None;
    };
    let contact = obb_obb_contact(first, second)?;
    ctx.resolve(&mut first.body, Collider::Body(&mut second.body), &contact);
    Some(contact)
}

pub(super) fn aabb_aabb(
    _: &mut PhysicsObject,
    _: &mut PhysicsObject,
    _: &mut CollisionContext,
) -> Option<Contact> {
    None
}

pub(super) fn aabb_obb(
    _: &mut PhysicsObject,
    _: &mut PhysicsObject,
    _: &mut CollisionContext,
) -> Option<Contact> {
    None
}

pub(super) fn obb_aabb(
    _: &mut PhysicsObject,
    _: &mut PhysicsObject,
    _: &mut CollisionContext,
) -> Option<Contact> {
    None
}
