//! Simulation systems: bodies, shapes, springs and collision handling.

pub mod collision;
pub mod rigid_body;
pub mod shapes;
pub mod spring;
