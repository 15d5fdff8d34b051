//! Damped Hookean spring between one or two rigid bodies.
//!
//! A spring is stored in the scene next to the bodies it connects but never
//! collides. It refers to its bodies through handles only; when an endpoint
//! disappears the scene switches the spring off instead of letting it act on
//! a different body or on a stale position.

use crate::core::error::{positive_dimension, PhysicsError, PhysicsResult};
use crate::domain::{BodyHandle, BodyMap, Colour, RenderBatch};
use crate::rigid_body::{RigidBody, Vec2};

pub const DEFAULT_DAMPING: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub body_a: BodyHandle,
    /// `None` pins the second end to the world point `contact_b`
    pub body_b: Option<BodyHandle>,
    /// Anchor on body A, in A's local frame
    pub contact_a: Vec2,
    /// Anchor on body B in B's local frame, or a world point when detached
    pub contact_b: Vec2,
    pub stiffness: f32,
    pub rest_length: f32,
    pub damping: f32,
    pub colour: Colour,
    pub active: bool,
}

impl Spring {
    /// Anchors at both centres, rest length 0, default damping
    pub fn new(body_a: BodyHandle, body_b: Option<BodyHandle>, stiffness: f32) -> Self {
        Self {
            body_a,
            body_b,
            contact_a: Vec2::zero(),
            contact_b: Vec2::zero(),
            stiffness,
            rest_length: 0.0,
            damping: DEFAULT_DAMPING,
            colour: Colour::WHITE,
            active: true,
        }
    }

    pub fn with_rest_length(mut self, rest_length: f32) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_contacts(mut self, contact_a: Vec2, contact_b: Vec2) -> Self {
        self.contact_a = contact_a;
        self.contact_b = contact_b;
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// World anchor points (A end, B end)
    pub fn anchors(&self, bodies: &BodyMap) -> PhysicsResult<(Vec2, Vec2)> {
        let a = rigid(bodies, self.body_a)?.to_world(self.contact_a);
        let b = match self.body_b {
            Some(handle) => rigid(bodies, handle)?.to_world(self.contact_b),
            None => self.contact_b,
        };
        Ok((a, b))
    }

    /// Apply one step of spring force scaled by `dt`.
    ///
    /// Returns the signed force magnitude along A->B (negative pulls the ends
    /// together), or 0 when inactive. Fails if an endpoint no longer exists.
    pub fn apply(&self, bodies: &mut BodyMap, dt: f32) -> PhysicsResult<f32> {
        if !self.active {
            return Ok(0.0);
        }

        let (pa, pb) = self.anchors(bodies)?;
        let length = pa.distance(pb);
        let direction = (pb - pa).normalize();

        let vel_a = anchor_velocity(rigid(bodies, self.body_a)?, pa);
        let vel_b = match self.body_b {
            Some(handle) => anchor_velocity(rigid(bodies, handle)?, pb),
            None => Vec2::zero(),
        };
        let closing = (vel_b - vel_a).dot(direction);

        let magnitude = self.stiffness * (self.rest_length - length) - self.damping * closing;
        let force = direction * magnitude;

        let a = rigid_mut(bodies, self.body_a)?;
        if !a.kinematic {
            let offset = pa - a.pos;
            a.apply_impulse(-force * dt, offset);
        }
        if let Some(handle) = self.body_b {
            let b = rigid_mut(bodies, handle)?;
            if !b.kinematic {
                let offset = pb - b.pos;
                b.apply_impulse(force * dt, offset);
            }
        }

        Ok(magnitude)
    }

    pub fn render(&self, bodies: &BodyMap, batch: &mut RenderBatch) {
        if !self.active {
            return;
        }
        if let Ok((a, b)) = self.anchors(bodies) {
            batch.line(a, b, self.colour);
        }
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        positive_dimension("spring stiffness", self.stiffness)?;
        if !(self.rest_length.is_finite() && self.rest_length >= 0.0) {
            return Err(PhysicsError::InvalidDimension { what: "rest length", value: self.rest_length });
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(PhysicsError::InvalidDimension { what: "damping", value: self.damping });
        }
        Ok(())
    }
}

/// Kinematic ends do not feed the damper
fn anchor_velocity(body: &RigidBody, anchor: Vec2) -> Vec2 {
    if body.kinematic {
        Vec2::zero()
    } else {
        body.point_velocity(anchor)
    }
}

pub(crate) fn rigid(bodies: &BodyMap, handle: BodyHandle) -> PhysicsResult<&RigidBody> {
    bodies
        .get(handle)
        .ok_or(PhysicsError::UnknownBody(handle))?
        .rigid_body()
        .ok_or(PhysicsError::NotARigidBody(handle))
}

pub(crate) fn rigid_mut(bodies: &mut BodyMap, handle: BodyHandle) -> PhysicsResult<&mut RigidBody> {
    bodies
        .get_mut(handle)
        .ok_or(PhysicsError::UnknownBody(handle))?
        .rigid_body_mut()
        .ok_or(PhysicsError::NotARigidBody(handle))
}
