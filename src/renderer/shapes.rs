//! Outline data for the ship
//!
//! Points are in unit ship space with the nose on +y; the scene scales them
//! by `SHIP_SCALE` and rotates by the ship's angle.

use glam::Vec2;

/// Hull without exhaust
pub const SHIP_HULL: [Vec2; 5] = [
    Vec2::new(-0.4, -0.5),
    Vec2::new(0.0, 0.5),
    Vec2::new(0.4, -0.5),
    Vec2::new(0.2, -0.4),
    Vec2::new(-0.2, -0.4),
];

/// Hull with the exhaust flame traced in, drawn while thrusting
pub const SHIP_WITH_THRUSTER: [Vec2; 9] = [
    Vec2::new(-0.4, -0.5),
    Vec2::new(0.0, 0.5),
    Vec2::new(0.4, -0.5),
    Vec2::new(0.2, -0.4),
    Vec2::new(0.0, -0.8),
    Vec2::new(-0.2, -0.4),
    Vec2::new(0.2, -0.4),
    Vec2::new(-0.2, -0.4),
    Vec2::new(-0.4, -0.5),
];

/// Ship outline for the current frame
pub fn ship_outline(thrusting: bool) -> &'static [Vec2] {
    if thrusting {
        &SHIP_WITH_THRUSTER
    } else {
        &SHIP_HULL
    }
}
