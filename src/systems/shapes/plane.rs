use crate::core::error::{PhysicsError, PhysicsResult};
use crate::domain::{Colour, RenderBatch};
use crate::rigid_body::Vec2;

use super::{Integrate, Render};

/// Half extent of the segment drawn for an (infinite) plane
const PLANE_DRAW_EXTENT: f32 = 300.0;
/// Depth of the shaded band drawn behind the plane surface
const PLANE_DRAW_DEPTH: f32 = 10.0;

/// Infinite static line `dot(p, normal) = distance`; solid side is behind the normal.
///
/// Always kinematic with elasticity 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    normal: Vec2,
    distance: f32,
    pub colour: Colour,
}

impl Plane {
    /// `normal` is normalised; a zero normal is rejected.
    pub fn new(normal: Vec2, distance: f32) -> PhysicsResult<Self> {
        let unit = normal.normalize();
        if unit == Vec2::zero() {
            return Err(PhysicsError::DegenerateNormal);
        }
        if !distance.is_finite() {
            return Err(PhysicsError::InvalidDimension { what: "plane distance", value: distance });
        }
        Ok(Self { normal: unit, distance, colour: Colour::PLANE })
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn elasticity(&self) -> f32 {
        1.0
    }

    /// Closest plane point to the world origin
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.normal * self.distance
    }

    /// Positive in front of the plane, negative behind it
    #[inline]
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        (point - self.origin()).dot(self.normal)
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        if (self.normal.length() - 1.0).abs() > 1e-3 {
            return Err(PhysicsError::DegenerateNormal);
        }
        Ok(())
    }
}

impl Integrate for Plane {
    fn integrate(&mut self, _gravity: Vec2, _dt: f32) {}
}

impl Render for Plane {
    fn render(&self, batch: &mut RenderBatch) {
        let centre = self.origin();
        let along = Vec2::new(self.normal.y, -self.normal.x) * PLANE_DRAW_EXTENT;
        let behind = self.normal * PLANE_DRAW_DEPTH;
        let start = centre + along;
        let end = centre - along;
        batch.polygon(vec![start, end, end - behind, start - behind], self.colour);
    }
}
