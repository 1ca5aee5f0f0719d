//! Asteroids 1979 - a vector-style asteroids shooter
//!
//! Core modules:
//! - `sim`: Simulation (motion, spawning, collisions, scoring, game phases)
//! - `tuning`: Data-driven game balance
//! - `platform`: Clock and input collaborators plus the fixed-step driver
//! - `renderer`: Read-only scene drawing against an abstract backend

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::{FrameClock, Game, InputDevice};
pub use renderer::Renderer;
pub use tuning::{SizeTable, TierStats, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accept
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Line thickness for outlines
    pub const THICKNESS: f32 = 2.0;
    /// Scale applied to the unit-sized ship outline
    pub const SHIP_SCALE: f32 = 38.0;
}

/// Unit heading for a rotation angle. Rotation 0 faces +y.
#[inline]
pub fn heading_from_rotation(rot: f32) -> Vec2 {
    Vec2::new(-rot.sin(), rot.cos())
}

/// Wrap a coordinate into [0, extent)
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position onto the torus [0, width) x [0, height)
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, width), wrap_coord(pos.y, height))
}
