use thiserror::Error;

use crate::domain::handle::BodyHandle;

/// Errors surfaced to the host when it hands the engine bad input.
///
/// Numerical invariants inside a step (unsupported shape pairs, two kinematic
/// bodies touching, energy drift) are handled where they occur and never show
/// up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("mass must be finite and greater than zero, got {0}")]
    InvalidMass(f32),

    #[error("elasticity must lie in [0, 1], got {0}")]
    InvalidElasticity(f32),

    #[error("{what} must be finite and greater than zero, got {value}")]
    InvalidDimension { what: &'static str, value: f32 },

    #[error("plane normal must be non-zero")]
    DegenerateNormal,

    #[error("fixed timestep must be finite and greater than zero, got {0}")]
    InvalidTimestep(f32),

    #[error("no body with handle {0:?} in this scene")]
    UnknownBody(BodyHandle),

    #[error("body {0:?} is not a rigid body")]
    NotARigidBody(BodyHandle),

    #[error("body {0:?} is not a pointer spring with a free end")]
    NotAPointerSpring(BodyHandle),

    #[error("invalid scene settings: {0}")]
    InvalidSettings(String),
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Checks `value` is a usable positive length (radius, width, ...).
pub(crate) fn positive_dimension(what: &'static str, value: f32) -> PhysicsResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidDimension { what, value })
    }
}
