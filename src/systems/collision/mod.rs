//! Narrow-phase collision: per-pair detectors, the dispatch table and the
//! shared impulse resolver.
//!
//! Detectors are plain functions over two scene objects. Each one matches the
//! variants it expects, computes a [`Contact`] oriented from its first argument
//! to its second, and hands the contact to the resolver through the
//! [`CollisionContext`]. Mirrored pairs reuse the canonical detector with the
//! arguments swapped.

mod boxes;
mod plane;
mod resolve;
mod sphere;

pub use boxes::{aabb_sphere_contact, obb_obb_contact, obb_sphere_contact};
pub use plane::{box_plane_contact, sphere_plane_contact};
pub use resolve::{resolve_collision, Collider, ResolveOutcome};
pub use sphere::sphere_sphere_contact;

use crate::domain::{ShapeType, SHAPE_COUNT};
use crate::rigid_body::{RigidBody, Vec2};
use crate::shapes::PhysicsObject;

/// Relative energy gain a single resolution may produce before it is flagged
pub const DEFAULT_ENERGY_TOLERANCE: f32 = 1e-3;

/// Where and how two shapes touch
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Contact {
    /// World-space contact point
    pub point: Vec2,
    /// Unit normal from the first shape towards the second (may be zero when
    /// the geometry gives no direction; the resolver then falls back to the
    /// centre-to-centre axis)
    pub normal: Vec2,
    pub penetration: f32,
}

impl Contact {
    /// Same contact seen from the other shape
    #[inline]
    pub fn flipped(self) -> Self {
        Self { normal: -self.normal, ..self }
    }
}

/// Per-sweep bookkeeping shared by all detectors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionContext {
    pub energy_tolerance: f32,
    /// Resolutions that actually applied an impulse
    pub resolutions: u32,
    /// Resolutions that gained energy beyond `energy_tolerance`
    pub anomalies: u32,
}

impl Default for CollisionContext {
    fn default() -> Self {
        Self::new(DEFAULT_ENERGY_TOLERANCE)
    }
}

impl CollisionContext {
    pub fn new(energy_tolerance: f32) -> Self {
        Self { energy_tolerance, resolutions: 0, anomalies: 0 }
    }

    /// Resolve `contact` between `a` and `b`, counting the outcome
    pub fn resolve(
        &mut self,
        a: &mut RigidBody,
        b: Collider<'_>,
        contact: &Contact,
    ) -> Option<ResolveOutcome> {
        let outcome = resolve_collision(a, b, contact.point, Some(contact.normal))?;
        self.resolutions += 1;

        if outcome.gained_energy(self.energy_tolerance) {
            self.anomalies += 1;
            log::warn!(
                "collision resolution gained energy: {:.6} -> {:.6} at ({:.3}, {:.3})",
                outcome.energy_before,
                outcome.energy_after,
                contact.point.x,
                contact.point.y
            );
        }
        Some(outcome)
    }
}

/// Detect (and on contact resolve) one ordered pair
pub type CollisionFn =
    fn(&mut PhysicsObject, &mut PhysicsObject, &mut CollisionContext) -> Option<Contact>;

/// Ordered-pair dispatch, row = first shape id, column = second shape id
pub const COLLISION_TABLE: [CollisionFn; SHAPE_COUNT * SHAPE_COUNT] = [
    // Plane
    plane::plane_plane,
    plane::plane_sphere,
    plane::plane_aabb,
    plane::plane_obb,
    // Sphere
    plane::sphere_plane,
    sphere::sphere_sphere,
    boxes::sphere_aabb,
    boxes::sphere_obb,
    // Aabb
    plane::aabb_plane,
    boxes::aabb_sphere,
    boxes::aabb_aabb,
    boxes::aabb_obb,
    // Obb
    plane::obb_plane,
    boxes::obb_sphere,
    boxes::obb_aabb,
    boxes::obb_obb,
];

/// `idA * SHAPE_COUNT + idB`, or `None` if either side does not collide
#[inline]
pub fn dispatch_index(a: ShapeType, b: ShapeType) -> Option<usize> {
    Some(a.collision_index()? * SHAPE_COUNT + b.collision_index()?)
}

/// Run the detector for `a` against `b`
pub fn detect(
    a: &mut PhysicsObject,
    b: &mut PhysicsObject,
    ctx: &mut CollisionContext,
) -> Option<Contact> {
    let index = dispatch_index(a.shape_type(), b.shape_type())?;
    COLLISION_TABLE[index](a, b, ctx)
}
