//! Renderer-agnostic draw commands.
//!
//! Bodies describe themselves as a list of primitives; the JS host decides how
//! to put them on screen.

use serde::Serialize;

use crate::domain::Colour;
use crate::rigid_body::Vec2;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    Circle { center: Vec2, radius: f32, colour: Colour },
    Line { from: Vec2, to: Vec2, colour: Colour },
    /// Filled convex polygon, points in winding order
    Polygon { points: Vec<Vec2>, colour: Colour },
}

/// Draw commands collected for one frame
#[derive(Clone, Debug, Default)]
pub struct RenderBatch {
    commands: Vec<DrawCommand>,
}

impl RenderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, colour: Colour) {
        self.push(DrawCommand::Circle { center, radius, colour });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, colour: Colour) {
        self.push(DrawCommand::Line { from, to, colour });
    }

    pub fn polygon(&mut self, points: Vec<Vec2>, colour: Colour) {
        self.push(DrawCommand::Polygon { points, colour });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// JSON array of commands for the JS host
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.commands).unwrap_or_else(|_| "[]".to_string())
    }
}
