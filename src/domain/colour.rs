use serde::{Deserialize, Serialize};

/// RGBA colour, each channel in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    pub const WHITE: Colour = Colour::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Colour = Colour::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Colour = Colour::rgba(1.0, 0.0, 0.0, 1.0);
    /// Translucent blue used for static geometry
    pub const PLANE: Colour = Colour::rgba(0.5, 0.5, 1.0, 0.5);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::WHITE
    }
}
