//! Core plumbing shared by every system: error types.

pub mod error;

pub use error::{PhysicsError, PhysicsResult};
