//! Asteroid spawning
//!
//! Asteroids appear just outside the visible rectangle on a random edge and
//! drift toward wherever the ship was at spawn time.

use glam::Vec2;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use super::shape::asteroid_outline;
use super::state::{Asteroid, AsteroidSize, GameEvent, GameState};
use crate::tuning::Tuning;

/// Heading used when the spawn point coincides with the ship
pub const DEFAULT_SPAWN_HEADING: Vec2 = Vec2::Y;

/// Sizes in the order their weights are listed
const SPAWN_SIZES: [AsteroidSize; 3] = [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small];

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnZone {
    North,
    South,
    East,
    West,
}

impl SpawnZone {
    pub const ALL: [SpawnZone; 4] = [SpawnZone::North, SpawnZone::South, SpawnZone::East, SpawnZone::West];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Random point along this edge, pushed outward by a distance in (0, margin]
    pub fn random_point<R: Rng + ?Sized>(self, rng: &mut R, tuning: &Tuning) -> Vec2 {
        let (w, h, margin) = (tuning.screen_width, tuning.screen_height, tuning.spawn_margin);
        let offset = margin - rng.random_range(0.0..margin);

        match self {
            SpawnZone::North => Vec2::new(rng.random_range(0.0..w), -offset),
            SpawnZone::South => Vec2::new(rng.random_range(0.0..w), past_edge(h, offset)),
            SpawnZone::East => Vec2::new(past_edge(w, offset), rng.random_range(0.0..h)),
            SpawnZone::West => Vec2::new(-offset, rng.random_range(0.0..h)),
        }
    }
}

/// `edge + offset`, kept strictly beyond `edge` when the offset is below its precision
fn past_edge(edge: f32, offset: f32) -> f32 {
    let pos = edge + offset;
    if pos > edge { pos } else { edge.next_up() }
}

/// Unit vector from `from` toward `target`, or the default heading when they coincide
pub fn heading_toward(from: Vec2, target: Vec2) -> Vec2 {
    (target - from).try_normalize().unwrap_or(DEFAULT_SPAWN_HEADING)
}

/// Draw a size tier from the Large 2 : Medium 2 : Small 1 distribution
pub fn random_size<R: Rng + ?Sized>(rng: &mut R) -> AsteroidSize {
    match WeightedIndex::new(SPAWN_SIZES.map(AsteroidSize::spawn_weight)) {
        Ok(dist) => SPAWN_SIZES[dist.sample(rng)],
        Err(e) => unreachable!("spawn weights are fixed non-zero constants: {e}"),
    }
}

/// Create a new asteroid off-screen, aimed at `target`
pub fn spawn_asteroid<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning, target: Vec2) -> Asteroid {
    let zone = SpawnZone::random(rng);
    let pos = zone.random_point(rng, tuning);
    let size = random_size(rng);
    let hitbox = tuning.sizes.stats(size).hitbox;
    let outline = asteroid_outline(rng, tuning.asteroid_sides, hitbox);

    Asteroid::new(size, pos, heading_toward(pos, target), outline, &tuning.sizes)
}

/// Advance the spawn timer and spawn one asteroid when it elapses
pub fn update_spawner(state: &mut GameState, dt: f32) -> Option<GameEvent> {
    state.spawn_timer += dt;
    if state.spawn_timer < state.tuning.spawn_interval {
        return None;
    }
    state.spawn_timer = 0.0;

    let asteroid = spawn_asteroid(&mut state.rng, &state.tuning, state.ship.pos);
    log::debug!(
        "Spawned {:?} asteroid at ({:.1}, {:.1})",
        asteroid.size,
        asteroid.pos.x,
        asteroid.pos.y
    );
    let event = GameEvent::AsteroidSpawned {
        size: asteroid.size,
        pos: asteroid.pos,
    };
    state.asteroids.push(asteroid);
    Some(event)
}
