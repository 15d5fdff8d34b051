use crate::core::error::{positive_dimension, PhysicsResult};
use crate::domain::{Colour, RenderBatch};
use crate::rigid_body::{RigidBody, Vec2};

use super::{ContainsPoint, Integrate, Render};

/// Axis-aligned box. Never rotates: angle and spin are pinned to zero every step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub body: RigidBody,
    /// Half width / half height
    pub extents: Vec2,
    pub colour: Colour,
}

impl Aabb {
    pub fn new(mut body: RigidBody, width: f32, height: f32) -> Self {
        body.set_angle(0.0);
        body.angular_vel = 0.0;
        // Rotation is locked, so any positive moment will do
        body.moment_of_inertia = 1.0;
        Self {
            body,
            extents: Vec2::new(width * 0.5, height * 0.5),
            colour: Colour::WHITE,
        }
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.body.pos - self.extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.body.pos + self.extents
    }

    /// Corners in the order (-x,-y), (+x,-y), (-x,+y), (+x,+y)
    pub fn corners(&self) -> [Vec2; 4] {
        let p = self.body.pos;
        let e = self.extents;
        [
            p - e,
            p + Vec2::new(e.x, -e.y),
            p + Vec2::new(-e.x, e.y),
            p + e,
        ]
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        positive_dimension("width", self.extents.x)?;
        positive_dimension("height", self.extents.y)?;
        self.body.validate()
    }
}

impl Integrate for Aabb {
    fn integrate(&mut self, gravity: Vec2, dt: f32) {
        self.body.angle = 0.0;
        self.body.angular_vel = 0.0;
        self.body.integrate(gravity, dt);
    }
}

impl ContainsPoint for Aabb {
    fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

impl Render for Aabb {
    fn render(&self, batch: &mut RenderBatch) {
        let [c0, c1, c2, c3] = self.corners();
        batch.polygon(vec![c0, c1, c3, c2], self.colour);
    }
}
