//! Detectors with a plane on one side.
//!
//! The moving shape is always resolved as body A against a fixed partner, so
//! the contact normal handed to the resolver is the plane normal reversed.

use crate::rigid_body::Vec2;
use crate::shapes::{Aabb, Obb, PhysicsObject, Plane, Sphere};

use super::{Collider, CollisionContext, Contact};

/// Sphere resting on or sinking into `plane`.
///
/// Touching counts (`d <= r`) but only while the sphere is moving into the
/// plane.
pub fn sphere_plane_contact(sphere: &Sphere, plane: &Plane) -> Option<Contact> {
    let n = plane.normal();
    let gap = plane.signed_distance(sphere.body.pos) - sphere.radius;
    if gap > 0.0 || sphere.body.velocity.dot(n) >= 0.0 {
        return None;
    }

    Some(Contact {
        point: sphere.body.pos - n * sphere.radius,
        normal: -n,
        penetration: -gap,
    })
}

/// Average of the box corners that are behind `plane` and not moving away
/// from it. `velocity_at` gives the world velocity of a corner.
pub fn box_plane_contact(
    corners: [Vec2; 4],
    velocity_at: impl Fn(Vec2) -> Vec2,
    plane: &Plane,
) -> Option<Contact> {
    let n = plane.normal();
    let mut sum = Vec2::zero();
    let mut count = 0u32;
    let mut deepest = 0.0f32;

    for corner in corners {
        let distance = plane.signed_distance(corner);
        if distance < 0.0 && velocity_at(corner).dot(n) <= 0.0 {
            sum += corner;
            count += 1;
            deepest = deepest.max(-distance);
        }
    }

    if count == 0 {
        return None;
    }

    Some(Contact {
        point: sum / count as f32,
        normal: -n,
        penetration: deepest,
    })
}

fn obb_plane_contact(obb: &Obb, plane: &Plane) -> Option<Contact> {
    box_plane_contact(obb.corners(), |corner| obb.body.point_velocity(corner), plane)
}

fn aabb_plane_contact(aabb: &Aabb, plane: &Plane) -> Option<Contact> {
    let velocity = aabb.body.velocity;
    box_plane_contact(aabb.corners(), |_| velocity, plane)
}

pub(super) fn plane_plane(
    _: &mut PhysicsObject,
    _: &mut PhysicsObject,
    _: &mut CollisionContext,
) -> Option<Contact> {
    None
}

pub(super) fn sphere_plane(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let (PhysicsObject::Sphere(sphere), PhysicsObject::Plane(plane)) = (a, b) else {
        return None;
    };
    let contact = sphere_plane_contact(sphere, plane)?;
    ctx.resolve(&mut sphere.body, Collider::Fixed { elasticity: plane.elasticity() }, &contact);
    Some(contact)
}

pub(super) fn plane_sphere(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    sphere_plane(b, a, ctx).map(Contact::flipped)
}

pub(super) fn obb_plane(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let (PhysicsObject::Obb(obb), PhysicsObject::Plane(plane)) = (a, b) else {
        return None;
    };
    let contact = obb_plane_contact(obb, plane)?;
    ctx.resolve(&mut obb.body, Collider::Fixed { elasticity: plane.elasticity() }, &contact);
    Some(contact)
}

pub(super) fn plane_obb(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    obb_plane(b, a, ctx).map(Contact::flipped)
}

pub(super) fn aabb_plane(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let (PhysicsObject::Aabb(aabb), PhysicsObject::Plane(plane)) = (a, b) else {
        return None;
    };
    let contact = aabb_plane_contact(aabb, plane)?;
    ctx.resolve(&mut aabb.body, Collider::Fixed { elasticity: plane.elasticity() }, &contact);
    // Contact lever arms may have spun the box; it never rotates
    aabb.body.angular_vel = 0.0;
    Some(contact)
}

pub(super) fn plane_aabb(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    aabb_plane(b, a, ctx).map(Contact::flipped)
}
