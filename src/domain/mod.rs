//! Domain vocabulary: shape taxonomy, body handles, colours and draw commands.

pub mod colour;
pub mod draw;
pub mod handle;
pub mod shape;

pub use colour::Colour;
pub use draw::{DrawCommand, RenderBatch};
pub use handle::{BodyHandle, BodyMap};
pub use shape::{ShapeType, SHAPE_COUNT};
