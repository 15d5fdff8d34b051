use crate::core::error::{PhysicsError, PhysicsResult};

use super::vec2::Vec2;

/// Rigid Body - linear and angular state shared by every moving shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity vector (units per second)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per second)
    pub angular_vel: f32,
    /// Mass, always > 0 (kinematic bodies keep a finite mass but ignore it)
    pub mass: f32,
    /// Moment of inertia, set by the owning shape
    pub moment_of_inertia: f32,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub elasticity: f32,
    /// Kinematic bodies have infinite effective mass: collisions and springs
    /// never push them, but they still move with their own velocity.
    pub kinematic: bool,

    // === Local frame, derived from `angle` ===
    local_x: Vec2,
    local_y: Vec2,
}

impl RigidBody {
    /// Create a body at rest with unit moment of inertia
    pub fn new(pos: Vec2, mass: f32) -> Self {
        let mut body = Self {
            pos,
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            mass,
            moment_of_inertia: 1.0,
            elasticity: 1.0,
            kinematic: false,
            local_x: Vec2::new(1.0, 0.0),
            local_y: Vec2::new(0.0, 1.0),
        };
        body.refresh_axes();
        body
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self.refresh_axes();
        self
    }

    pub fn with_angular_velocity(mut self, angular_vel: f32) -> Self {
        self.angular_vel = angular_vel;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_kinematic(mut self, kinematic: bool) -> Self {
        self.kinematic = kinematic;
        self
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.refresh_axes();
    }

    #[inline]
    pub fn local_x(&self) -> Vec2 {
        self.local_x
    }

    #[inline]
    pub fn local_y(&self) -> Vec2 {
        self.local_y
    }

    /// Rebuild the local frame from `angle`
    #[inline]
    pub fn refresh_axes(&mut self) {
        let (sin, cos) = self.angle.sin_cos();
        self.local_x = Vec2::new(cos, sin);
        self.local_y = Vec2::new(-sin, cos);
    }

    /// Advance one fixed step.
    ///
    /// The frame is rebuilt before the step and again once the angle moved, so
    /// collision tests later in the same step see the new orientation.
    pub fn integrate(&mut self, gravity: Vec2, dt: f32) {
        self.refresh_axes();

        self.pos += self.velocity * dt;
        self.angle += self.angular_vel * dt;

        self.refresh_axes();

        if !self.kinematic {
            self.apply_impulse(gravity * self.mass * dt, Vec2::zero());
        }
    }

    /// Apply an impulse at `contact_offset` from the center of mass.
    ///
    /// Continuous forces must be pre-scaled by dt by the caller.
    pub fn apply_impulse(&mut self, impulse: Vec2, contact_offset: Vec2) {
        self.velocity += impulse / self.mass;
        self.angular_vel += contact_offset.cross(impulse) / self.moment_of_inertia;
    }

    /// Transform a point in body-local coordinates to world coordinates
    #[inline]
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        self.pos + self.local_x * local.x + self.local_y * local.y
    }

    /// Transform a world point into this body's local frame
    #[inline]
    pub fn to_local(&self, world: Vec2) -> Vec2 {
        let d = world - self.pos;
        Vec2::new(d.dot(self.local_x), d.dot(self.local_y))
    }

    /// Velocity of the material point currently at `world`
    #[inline]
    pub fn point_velocity(&self, world: Vec2) -> Vec2 {
        self.velocity + Vec2::cross_scalar(self.angular_vel, world - self.pos)
    }

    /// Linear plus rotational kinetic energy
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
            + 0.5 * self.moment_of_inertia * self.angular_vel * self.angular_vel
    }

    /// `1/m + (r x n)^2 / I`, or 0 for a kinematic body
    #[inline]
    pub fn effective_inverse_mass(&self, r: Vec2, n: Vec2) -> f32 {
        if self.kinematic {
            return 0.0;
        }
        let rn = r.cross(n);
        1.0 / self.mass + rn * rn / self.moment_of_inertia
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhysicsError::InvalidMass(self.mass));
        }
        if !(0.0..=1.0).contains(&self.elasticity) {
            return Err(PhysicsError::InvalidElasticity(self.elasticity));
        }
        if !(self.moment_of_inertia.is_finite() && self.moment_of_inertia > 0.0) {
            return Err(PhysicsError::InvalidDimension {
                what: "moment of inertia",
                value: self.moment_of_inertia,
            });
        }
        Ok(())
    }
}
