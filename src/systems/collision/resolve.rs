//! Two-body impulse resolution with angular terms.
//!
//! One routine covers every pairing (dynamic/dynamic, dynamic/kinematic,
//! body/plane): kinematic participants contribute zero inverse mass and zero
//! rotational term, and never receive the impulse.

use crate::rigid_body::{RigidBody, Vec2};

/// Second participant of a collision
#[derive(Debug)]
pub enum Collider<'a> {
    /// Immovable, velocity-less geometry (a plane)
    Fixed { elasticity: f32 },
    Body(&'a mut RigidBody),
}

impl Collider<'_> {
    fn is_kinematic(&self) -> bool {
        match self {
            Collider::Fixed { .. } => true,
            Collider::Body(body) => body.kinematic,
        }
    }

    fn elasticity(&self) -> f32 {
        match self {
            Collider::Fixed { elasticity } => *elasticity,
            Collider::Body(body) => body.elasticity,
        }
    }

    fn energy(&self) -> f32 {
        match self {
            Collider::Body(body) if !body.kinematic => body.kinetic_energy(),
            _ => 0.0,
        }
    }
}

/// What a resolution did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveOutcome {
    /// Impulse applied to A (B received the negation)
    pub impulse: Vec2,
    /// Normal actually used, unit length, A towards B
    pub normal: Vec2,
    /// Kinetic energy of the non-kinematic participants before/after
    pub energy_before: f32,
    pub energy_after: f32,
}

impl ResolveOutcome {
    /// True when the resolution created more energy than `tolerance` allows
    /// (relative to the energy going in, floored at one unit).
    pub fn gained_energy(&self, tolerance: f32) -> bool {
        self.energy_after - self.energy_before > tolerance * self.energy_before.max(1.0)
    }
}

/// Resolve a contact between `a` and `b`.
///
/// `normal` points from A towards B. When it is missing or zero the
/// centre-to-centre direction is used instead; a fixed partner has no centre,
/// so that case is skipped. Returns `None` when nothing was applied: the
/// bodies are already separating, or both are kinematic.
pub fn resolve_collision(
    a: &mut RigidBody,
    mut b: Collider<'_>,
    contact: Vec2,
    normal: Option<Vec2>,
) -> Option<ResolveOutcome> {
    let normal = match (normal.map(|n| n.normalize()), &b) {
        (Some(n), _) if n != Vec2::zero() => n,
        (_, Collider::Body(other)) => (other.pos - a.pos).normalize(),
        (_, Collider::Fixed { .. }) => return None,
    };
    if normal == Vec2::zero() {
        return None;
    }

    let ra = contact - a.pos;
    let vel_a = a.velocity + Vec2::cross_scalar(a.angular_vel, ra);
    let (rb, vel_b) = match &b {
        Collider::Body(other) => {
            let rb = contact - other.pos;
            (rb, other.velocity + Vec2::cross_scalar(other.angular_vel, rb))
        }
        Collider::Fixed { .. } => (Vec2::zero(), Vec2::zero()),
    };

    let closing = (vel_a - vel_b).dot(normal);
    if closing <= 0.0 {
        return None;
    }

    if a.kinematic && b.is_kinematic() {
        return None;
    }

    let elasticity = (a.elasticity + b.elasticity()) * 0.5;

    let mut denominator = a.effective_inverse_mass(ra, normal);
    if let Collider::Body(other) = &b {
        denominator += other.effective_inverse_mass(rb, normal);
    }
    if denominator <= 0.0 {
        return None;
    }

    let j = -(1.0 + elasticity) * closing / denominator;
    let impulse = normal * j;

    let energy_before = if a.kinematic { 0.0 } else { a.kinetic_energy() } + b.energy();

    if !a.kinematic {
        a.apply_impulse(impulse, ra);
    }
    if let Collider::Body(other) = &mut b {
        if !other.kinematic {
            other.apply_impulse(-impulse, rb);
        }
    }

    let energy_after = if a.kinematic { 0.0 } else { a.kinetic_energy() } + b.energy();

    Some(ResolveOutcome { impulse, normal, energy_before, energy_after })
}
