//! Game state and core simulation types
//!
//! One `GameState` owns every entity of a session. Tick phases borrow it
//! mutably one after another; nothing else keeps a handle to it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::heading_from_rotation;
use crate::tuning::{SizeTable, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; waits for a reset input
    GameOver,
}

/// Asteroid size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 3] = [AsteroidSize::Small, AsteroidSize::Medium, AsteroidSize::Large];

    /// Tier produced when an asteroid of this size breaks apart
    pub fn next_smaller(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Relative weight when picking the size of a freshly spawned asteroid
    pub fn spawn_weight(self) -> u32 {
        match self {
            AsteroidSize::Large => 2,
            AsteroidSize::Medium => 2,
            AsteroidSize::Small => 1,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Scalar speed along the heading, in units per tick
    pub speed: f32,
    /// Rotation in radians; 0 points along +y
    pub rot: f32,
    /// Seconds left before the ship is interactive again
    pub death_timer: f32,
}

impl Ship {
    /// A ship at the center of the screen, facing +y
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.screen_center(),
            speed: tuning.initial_speed,
            rot: 0.0,
            death_timer: 0.0,
        }
    }

    /// Dead ships neither move nor collide
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.death_timer > 0.0
    }

    #[inline]
    pub fn heading(&self) -> Vec2 {
        heading_from_rotation(self.rot)
    }

    pub fn velocity(&self) -> Vec2 {
        self.heading() * self.speed
    }

    /// Count down the death timer, never below zero
    pub fn tick_death_timer(&mut self, dt: f32) {
        if self.death_timer > 0.0 {
            self.death_timer = (self.death_timer - dt).max(0.0);
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Units per tick along `heading`
    pub speed: f32,
    /// Unit direction fixed at creation
    pub heading: Vec2,
    /// Irregular outline relative to `pos`
    pub outline: Vec<Vec2>,
    pub size: AsteroidSize,
    pub hitbox: f32,
    pub health: u8,
    /// Points awarded when destroyed
    pub score: u64,
}

impl Asteroid {
    /// Build an asteroid whose stats come from the size table
    pub fn new(
        size: AsteroidSize,
        pos: Vec2,
        heading: Vec2,
        outline: Vec<Vec2>,
        sizes: &SizeTable,
    ) -> Self {
        let stats = sizes.stats(size);
        Self {
            pos,
            speed: stats.speed,
            heading,
            outline,
            size,
            hitbox: stats.hitbox,
            health: stats.health,
            score: stats.score,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.heading * self.speed
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

/// A fired projectile, drawn as a short line segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub start: Vec2,
    /// Leading point, `start + heading * bullet_length`
    pub end: Vec2,
    /// Units per tick along `heading`
    pub speed: f32,
    pub heading: Vec2,
}

impl Bullet {
    /// Fire from `pos` in the direction the ship faces
    pub fn new(pos: Vec2, rot: f32, tuning: &Tuning) -> Self {
        let heading = heading_from_rotation(rot);
        Self {
            start: pos,
            end: pos + heading * tuning.bullet_length,
            speed: tuning.bullet_speed,
            heading,
        }
    }

    /// Point used for hit tests
    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.end
    }
}

/// Score accumulator and remaining lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u8,
}

impl Scoreboard {
    pub fn new(lives: u8) -> Self {
        Self { score: 0, lives }
    }

    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Take one life. Returns true once no lives remain.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.is_depleted()
    }

    pub fn is_depleted(&self) -> bool {
        self.lives == 0
    }
}

/// Something that happened during a tick, for audio/HUD/logging layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired { pos: Vec2 },
    AsteroidSpawned { size: AsteroidSize, pos: Vec2 },
    /// An asteroid reached zero health; `children` is how many replaced it
    AsteroidDestroyed {
        size: AsteroidSize,
        pos: Vec2,
        points: u64,
        children: usize,
    },
    ShipHit { lives_left: u8 },
    GameOver { score: u64 },
    Reset,
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance parameters this session runs with
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    /// Seconds accumulated toward the next asteroid spawn
    pub spawn_timer: f32,
    /// Seconds until the ship may fire again
    pub fire_cooldown: f32,
    pub scoreboard: Scoreboard,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            ship: Ship::new(&tuning),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            spawn_timer: 0.0,
            fire_cooldown: 0.0,
            scoreboard: Scoreboard::new(tuning.starting_lives),
            time_ticks: 0,
            tuning,
        }
    }

    /// Reinitialize the session. Tuning and RNG stream carry over.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.ship = Ship::new(&self.tuning);
        self.asteroids.clear();
        self.bullets.clear();
        self.spawn_timer = 0.0;
        self.fire_cooldown = 0.0;
        self.scoreboard = Scoreboard::new(self.tuning.starting_lives);
        self.time_ticks = 0;
    }

    pub fn score(&self) -> u64 {
        self.scoreboard.score
    }

    pub fn lives(&self) -> u8 {
        self.scoreboard.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ship.pos, Vec2::new(640.0, 480.0));
        assert_eq!(state.ship.rot, 0.0);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.score(), 0);
        assert!(state.asteroids.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_size_chain() {
        assert_eq!(AsteroidSize::Large.next_smaller(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.next_smaller(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.next_smaller(), None);
    }

    #[test]
    fn test_asteroid_stats_from_table() {
        let sizes = SizeTable::default();
        let a = Asteroid::new(AsteroidSize::Medium, Vec2::ZERO, Vec2::X, Vec::new(), &sizes);
        assert_eq!(a.hitbox, 25.0);
        assert_eq!(a.health, 2);
        assert_eq!(a.score, 50);
        assert_eq!(a.velocity(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_bullet_end_follows_heading() {
        let tuning = Tuning::default();
        let bullet = Bullet::new(Vec2::new(100.0, 100.0), 0.0, &tuning);
        // Rotation 0 faces +y
        assert!((bullet.end - Vec2::new(100.0, 130.0)).length() < 1e-4);
    }

    #[test]
    fn test_lives_saturate() {
        let mut board = Scoreboard::new(1);
        assert!(board.lose_life());
        assert!(board.lose_life());
        assert_eq!(board.lives, 0);
    }

    #[test]
    fn test_death_timer_clamps() {
        let mut ship = Ship::new(&Tuning::default());
        ship.death_timer = 0.005;
        ship.tick_death_timer(1.0 / 120.0);
        assert_eq!(ship.death_timer, 0.0);
        assert!(!ship.is_dead());
    }
}
