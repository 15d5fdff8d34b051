//! Shape variants and the object type the scene stores.
//!
//! Every scene entry is a `PhysicsObject`, a closed set of variants. What an
//! object can do is split into small capability traits so planes and springs
//! only carry what they need.

mod aabb;
mod obb;
mod plane;
mod sphere;

pub use aabb::Aabb;
pub use obb::{CornerProbe, Obb};
pub use plane::Plane;
pub use sphere::Sphere;

use crate::core::error::PhysicsResult;
use crate::domain::{RenderBatch, ShapeType};
use crate::rigid_body::{RigidBody, Vec2};
use crate::spring::Spring;

/// Advances its own state by one fixed step
pub trait Integrate {
    fn integrate(&mut self, gravity: Vec2, dt: f32);
}

/// Point picking
pub trait ContainsPoint {
    fn contains_point(&self, point: Vec2) -> bool;
}

/// Render hook, called once per frame. Must not touch physics state.
pub trait Render {
    fn render(&self, batch: &mut RenderBatch);
}

/// Anything a scene can own
#[derive(Clone, Debug, PartialEq)]
pub enum PhysicsObject {
    Plane(Plane),
    Sphere(Sphere),
    Aabb(Aabb),
    Obb(Obb),
    Spring(Spring),
}

impl PhysicsObject {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            PhysicsObject::Plane(_) => ShapeType::Plane,
            PhysicsObject::Sphere(_) => ShapeType::Sphere,
            PhysicsObject::Aabb(_) => ShapeType::Aabb,
            PhysicsObject::Obb(_) => ShapeType::Obb,
            PhysicsObject::Spring(_) => ShapeType::Joint,
        }
    }

    pub fn is_kinematic(&self) -> bool {
        match self {
            PhysicsObject::Plane(_) | PhysicsObject::Spring(_) => true,
            other => other.rigid_body().is_some_and(|b| b.kinematic),
        }
    }

    pub fn elasticity(&self) -> f32 {
        match self {
            PhysicsObject::Plane(p) => p.elasticity(),
            PhysicsObject::Spring(_) => 1.0,
            other => other.rigid_body().map_or(1.0, |b| b.elasticity),
        }
    }

    /// The dynamic state, for shapes that have one
    pub fn rigid_body(&self) -> Option<&RigidBody> {
        match self {
            PhysicsObject::Sphere(s) => Some(&s.body),
            PhysicsObject::Aabb(b) => Some(&b.body),
            PhysicsObject::Obb(b) => Some(&b.body),
            PhysicsObject::Plane(_) | PhysicsObject::Spring(_) => None,
        }
    }

    pub fn rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        match self {
            PhysicsObject::Sphere(s) => Some(&mut s.body),
            PhysicsObject::Aabb(b) => Some(&mut b.body),
            PhysicsObject::Obb(b) => Some(&mut b.body),
            PhysicsObject::Plane(_) | PhysicsObject::Spring(_) => None,
        }
    }

    pub fn as_spring(&self) -> Option<&Spring> {
        match self {
            PhysicsObject::Spring(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_spring_mut(&mut self) -> Option<&mut Spring> {
        match self {
            PhysicsObject::Spring(s) => Some(s),
            _ => None,
        }
    }

    /// Checks construction parameters. Spring endpoints are checked by the scene.
    pub fn validate(&self) -> PhysicsResult<()> {
        match self {
            PhysicsObject::Plane(p) => p.validate(),
            PhysicsObject::Sphere(s) => s.validate(),
            PhysicsObject::Aabb(b) => b.validate(),
            PhysicsObject::Obb(b) => b.validate(),
            PhysicsObject::Spring(s) => s.validate(),
        }
    }
}

impl ContainsPoint for PhysicsObject {
    fn contains_point(&self, point: Vec2) -> bool {
        match self {
            PhysicsObject::Sphere(s) => s.contains_point(point),
            PhysicsObject::Aabb(b) => b.contains_point(point),
            PhysicsObject::Obb(b) => b.contains_point(point),
            // Static geometry and joints are not pickable
            PhysicsObject::Plane(_) | PhysicsObject::Spring(_) => false,
        }
    }
}

impl Integrate for PhysicsObject {
    /// Springs are stepped by the scene, which owns the bodies they pull on
    fn integrate(&mut self, gravity: Vec2, dt: f32) {
        match self {
            PhysicsObject::Plane(p) => p.integrate(gravity, dt),
            PhysicsObject::Sphere(s) => s.integrate(gravity, dt),
            PhysicsObject::Aabb(b) => b.integrate(gravity, dt),
            PhysicsObject::Obb(b) => b.integrate(gravity, dt),
            PhysicsObject::Spring(_) => {}
        }
    }
}

impl Render for PhysicsObject {
    fn render(&self, batch: &mut RenderBatch) {
        match self {
            PhysicsObject::Plane(p) => p.render(batch),
            PhysicsObject::Sphere(s) => s.render(batch),
            PhysicsObject::Aabb(b) => b.render(batch),
            PhysicsObject::Obb(b) => b.render(batch),
            // Needs the body map for its anchors, see `Spring::render`
            PhysicsObject::Spring(_) => {}
        }
    }
}

impl From<Plane> for PhysicsObject {
    fn from(value: Plane) -> Self {
        PhysicsObject::Plane(value)
    }
}

impl From<Sphere> for PhysicsObject {
    fn from(value: Sphere) -> Self {
        PhysicsObject::Sphere(value)
    }
}

impl From<Aabb> for PhysicsObject {
    fn from(value: Aabb) -> Self {
        PhysicsObject::Aabb(value)
    }
}

impl From<Obb> for PhysicsObject {
    fn from(value: Obb) -> Self {
        PhysicsObject::Obb(value)
    }
}

impl From<Spring> for PhysicsObject {
    fn from(value: Spring) -> Self {
        PhysicsObject::Spring(value)
    }
}
