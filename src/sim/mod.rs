//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - Fixed tick order
//! - Seeded RNG only
//! - One owned `GameState`, mutated through `&mut` by each phase

pub mod collision;
pub mod fragment;
pub mod motion;
pub mod shape;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, resolve_bullet_collisions, resolve_ship_collisions};
pub use fragment::fragment;
pub use spawn::{SpawnZone, spawn_asteroid};
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameEvent, GamePhase, GameState, Scoreboard, Ship,
};
pub use tick::{TickInput, tick};
