//! Rendering interface
//!
//! The simulation never draws. A backend implements [`Renderer`] and
//! [`draw_scene`] walks a read-only `GameState` issuing primitive calls.

pub mod commands;
pub mod scene;
pub mod shapes;

pub use commands::{CommandBuffer, DrawCommand};
pub use scene::{SceneOptions, draw_scene};

use glam::Vec2;

/// RGBA color, components in [0, 1]
pub type Color = [f32; 4];

pub const WHITE: Color = [0.96, 0.96, 0.96, 1.0];
pub const RED: Color = [0.9, 0.16, 0.22, 1.0];
pub const DIM: Color = [0.5, 0.5, 0.5, 1.0];

/// Placement of a local-space outline in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub origin: Vec2,
    pub scale: f32,
    /// Radians, counter-clockwise
    pub rotation: f32,
}

impl Transform {
    pub const fn at(origin: Vec2) -> Self {
        Self {
            origin,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Map a local point into world space: rotate, scale, then translate
    #[inline]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::from_angle(self.rotation).rotate(point) * self.scale + self.origin
    }
}

/// Drawing primitives a backend must provide
pub trait Renderer {
    /// Closed outline through `points` (last point joins the first)
    fn draw_polyline(&mut self, points: &[Vec2], transform: Transform, thickness: f32, color: Color);

    /// Open line segment in world space
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);

    /// Circle outline in world space
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);

    /// Width of `text` at `size`, for layout. Backends with real fonts should override.
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}
