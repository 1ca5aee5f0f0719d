//! Collision detection and response
//!
//! Everything collides as circles. Ship hits are applied at most once per
//! tick; bullet hits consume the bullet and may break the asteroid apart.

use glam::Vec2;

use super::fragment::fragment;
use super::state::{Asteroid, Bullet, GameEvent, GameState};

/// True if two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Index of the first asteroid the bullet's tip overlaps
pub fn first_hit(bullet: &Bullet, bullet_radius: f32, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|a| circles_overlap(bullet.tip(), bullet_radius, a.pos, a.hitbox))
}

/// Apply the ship↔asteroid rule: one penalty and one lost life per tick at most.
///
/// Returns the hit event when the ship was struck this tick.
pub fn resolve_ship_collisions(state: &mut GameState) -> Option<GameEvent> {
    let ship = &state.ship;
    if ship.is_dead() {
        return None;
    }

    let hit = state
        .asteroids
        .iter()
        .any(|a| circles_overlap(ship.pos, state.tuning.ship_hitbox, a.pos, a.hitbox));
    if !hit {
        return None;
    }

    state.ship.death_timer += state.tuning.death_penalty;
    state.scoreboard.lose_life();
    log::debug!("Ship hit, {} lives left", state.scoreboard.lives);

    Some(GameEvent::ShipHit {
        lives_left: state.scoreboard.lives,
    })
}

/// Apply the bullet↔asteroid rule for every bullet.
///
/// Each bullet damages at most the first asteroid it overlaps and is consumed
/// by the hit. An asteroid that reaches zero health scores, leaves the
/// collection immediately and is replaced by its children, so later bullets
/// in the same tick see the updated field. Bullets are moved out and the
/// survivors rebuilt, so none is skipped or tested twice.
pub fn resolve_bullet_collisions(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.bullets.is_empty() || state.asteroids.is_empty() {
        return events;
    }

    let bullet_radius = state.tuning.bullet_hitbox;
    let bullets = std::mem::take(&mut state.bullets);
    let mut surviving = Vec::with_capacity(bullets.len());

    for bullet in bullets {
        let Some(index) = first_hit(&bullet, bullet_radius, &state.asteroids) else {
            surviving.push(bullet);
            continue;
        };

        let asteroid = &mut state.asteroids[index];
        asteroid.health = asteroid.health.saturating_sub(1);
        if asteroid.is_destroyed() {
            let destroyed = state.asteroids.swap_remove(index);
            events.push(destroy_asteroid(state, destroyed));
        }
    }

    state.bullets = surviving;
    events
}

/// Score a destroyed asteroid and append its fragments
fn destroy_asteroid(state: &mut GameState, asteroid: Asteroid) -> GameEvent {
    state.scoreboard.award(asteroid.score);

    let children = if asteroid.size.next_smaller().is_some() {
        let pieces = fragment(&asteroid, &state.tuning, &mut state.rng);
        let count = pieces.len();
        state.asteroids.extend(pieces);
        count
    } else {
        0
    };

    log::debug!(
        "{:?} asteroid destroyed at ({:.1}, {:.1}) for {} points, {} children",
        asteroid.size,
        asteroid.pos.x,
        asteroid.pos.y,
        asteroid.score,
        children
    );

    GameEvent::AsteroidDestroyed {
        size: asteroid.size,
        pos: asteroid.pos,
        points: asteroid.score,
        children,
    }
}
