//! Asteroid fragmentation
//!
//! A destroyed Large or Medium asteroid breaks into two asteroids of the next
//! smaller tier. Small asteroids simply vanish and must never reach here.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::shape::asteroid_outline;
use super::state::Asteroid;
use crate::tuning::Tuning;

/// Number of children a breakable asteroid splits into
pub const FRAGMENT_COUNT: usize = 2;

/// Uniformly random unit vector
pub fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.random_range(0.0..TAU);
    Vec2::new(angle.cos(), angle.sin())
}

/// Children of `parent`, placed at its last position.
///
/// # Panics
/// If `parent` is Small. Callers check `next_smaller()` first.
pub fn fragment<R: Rng + ?Sized>(parent: &Asteroid, tuning: &Tuning, rng: &mut R) -> [Asteroid; FRAGMENT_COUNT] {
    let Some(child_size) = parent.size.next_smaller() else {
        panic!("fragment called on a {:?} asteroid", parent.size);
    };
    let hitbox = tuning.sizes.stats(child_size).hitbox;

    std::array::from_fn(|_| {
        let heading = random_heading(rng);
        let outline = asteroid_outline(rng, tuning.asteroid_sides, hitbox);
        Asteroid::new(child_size, parent.pos, heading, outline, &tuning.sizes)
    })
}
