use crate::core::error::{positive_dimension, PhysicsResult};
use crate::domain::{Colour, RenderBatch};
use crate::rigid_body::{RigidBody, Vec2};

use super::{ContainsPoint, Integrate, Render};

/// Circle collider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub body: RigidBody,
    pub radius: f32,
    pub colour: Colour,
}

impl Sphere {
    /// Wraps `body` and sets its moment of inertia to `0.5 * m * r^2`
    pub fn new(mut body: RigidBody, radius: f32) -> Self {
        body.moment_of_inertia = 0.5 * body.mass * radius * radius;
        Self { body, radius, colour: Colour::WHITE }
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        positive_dimension("radius", self.radius)?;
        self.body.validate()
    }
}

impl Integrate for Sphere {
    fn integrate(&mut self, gravity: Vec2, dt: f32) {
        self.body.integrate(gravity, dt);
    }
}

impl ContainsPoint for Sphere {
    fn contains_point(&self, point: Vec2) -> bool {
        point.distance(self.body.pos) <= self.radius
    }
}

impl Render for Sphere {
    fn render(&self, batch: &mut RenderBatch) {
        batch.circle(self.body.pos, self.radius, self.colour);
        // Spoke so rotation is visible
        let spoke = Vec2::new(self.body.angle.cos(), self.body.angle.sin()) * self.radius;
        batch.line(self.body.pos, self.body.pos + spoke, Colour::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moment_is_half_m_r_squared() {
        let sphere = Sphere::new(RigidBody::new(Vec2::zero(), 4.0), 3.0);
        assert_eq!(sphere.body.moment_of_inertia, 18.0);
    }

    #[test]
    fn contains_point_includes_boundary() {
        let sphere = Sphere::new(RigidBody::new(Vec2::new(1.0, 1.0), 1.0), 2.0);
        assert!(sphere.contains_point(Vec2::new(3.0, 1.0)));
        assert!(!sphere.contains_point(Vec2::new(3.1, 1.0)));
    }
}
