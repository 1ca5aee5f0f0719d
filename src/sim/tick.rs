//! Fixed timestep simulation tick
//!
//! Phases run in a fixed order every tick: ship input and motion, asteroid
//! and bullet motion, spawning, collisions, then phase evaluation. Each phase
//! sees the complete result of the ones before it and nothing after.

use super::collision::{resolve_bullet_collisions, resolve_ship_collisions};
use super::motion::{advance_asteroids, advance_bullets, update_ship};
use super::spawn::update_spawner;
use super::state::{Bullet, GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    /// Held fire; shots are rate-limited by the cooldown
    pub fire: bool,
    /// Confirm/restart, edge-triggered
    pub reset: bool,
}

/// Advance the game state by one tick of `dt` seconds.
///
/// Returns what happened during the tick, in phase order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.reset {
            state.reset();
            log::info!("Game reset");
            events.push(GameEvent::Reset);
        }
        return events;
    }

    state.time_ticks += 1;

    // Ship
    update_ship(&mut state.ship, input, &state.tuning);
    events.extend(fire(state, input.fire, dt));

    // Everything else drifts
    advance_asteroids(&mut state.asteroids, &state.tuning);
    advance_bullets(&mut state.bullets, &state.tuning);

    events.extend(update_spawner(state, dt));

    events.extend(resolve_ship_collisions(state));
    events.extend(resolve_bullet_collisions(state));

    state.ship.tick_death_timer(dt);

    if state.scoreboard.is_depleted() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, final score {}",
            state.time_ticks,
            state.score()
        );
        events.push(GameEvent::GameOver {
            score: state.score(),
        });
    }

    events
}

/// Tick the fire cooldown and shoot if allowed
fn fire(state: &mut GameState, held: bool, dt: f32) -> Option<GameEvent> {
    state.fire_cooldown = (state.fire_cooldown - dt).max(0.0);
    if !held || state.fire_cooldown > 0.0 || state.ship.is_dead() {
        return None;
    }

    let bullet = Bullet::new(state.ship.pos, state.ship.rot, &state.tuning);
    let pos = bullet.start;
    state.bullets.push(bullet);
    state.fire_cooldown = state.tuning.fire_cooldown;
    Some(GameEvent::BulletFired { pos })
}
