//! RigidBody - A solid body that moves as a unit
//!
//! Holds position, orientation and their rates plus mass properties. Shapes
//! wrap a `RigidBody` and add geometry; the resolver and springs talk to the
//! body directly through `apply_impulse`.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::RigidBody;
