//! Asteroids 1979 entry point
//!
//! Native builds have no window backend; this binary runs a headless session
//! with a simple autopilot so the simulation can be exercised from a shell.
//!
//! Environment:
//! - `ASTEROIDS_TUNING`: path to a JSON tuning file
//! - `ASTEROIDS_SEED`: RNG seed (default 1979)
//! - `ASTEROIDS_SECONDS`: simulated seconds to run (default 120)

use asteroids_1979::consts::SIM_DT;
use asteroids_1979::platform::{FixedClock, FrameClock, Game};
use asteroids_1979::renderer::CommandBuffer;
use asteroids_1979::sim::{GameEvent, GameState, TickInput};
use asteroids_1979::{Tuning, heading_from_rotation};

/// Aim tolerance before the autopilot opens fire (radians)
const AIM_TOLERANCE: f32 = 0.12;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Turn toward the nearest asteroid and shoot when lined up
fn autopilot(state: &GameState) -> TickInput {
    if state.is_game_over() {
        return TickInput {
            reset: true,
            ..Default::default()
        };
    }

    let ship = &state.ship;
    let Some(target) = state
        .asteroids
        .iter()
        .min_by(|a, b| a.pos.distance_squared(ship.pos).total_cmp(&b.pos.distance_squared(ship.pos)))
    else {
        return TickInput::default();
    };

    let to_target = (target.pos - ship.pos).normalize_or_zero();
    // Signed angle from heading to target, positive is counter-clockwise
    let angle = heading_from_rotation(ship.rot).angle_to(to_target);

    TickInput {
        rotate_left: angle < -AIM_TOLERANCE,
        rotate_right: angle > AIM_TOLERANCE,
        thrust_backward: true,
        fire: angle.abs() <= AIM_TOLERANCE,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let tuning = match std::env::var("ASTEROIDS_TUNING") {
        Ok(path) => Tuning::load_or_default(path),
        Err(_) => Tuning::default(),
    };
    let seed: u64 = env_or("ASTEROIDS_SEED", 1979);
    let seconds: f32 = env_or("ASTEROIDS_SECONDS", 120.0);

    log::info!("Asteroids 1979 (headless) starting with seed {}", seed);

    let mut game = Game::new(seed, tuning);
    let mut clock = FixedClock::new(SIM_DT);
    let frames = (seconds / SIM_DT).round() as u64;

    let mut games_played = 1;
    let mut best_score = 0;
    let mut destroyed = 0;
    for _ in 0..frames {
        let input = autopilot(&game.state);
        for event in game.update(clock.frame_delta_time(), &input) {
            match event {
                GameEvent::AsteroidDestroyed { .. } => destroyed += 1,
                GameEvent::GameOver { score } => best_score = best_score.max(score),
                GameEvent::Reset => games_played += 1,
                _ => {}
            }
        }
    }
    best_score = best_score.max(game.state.score());

    let mut frame = CommandBuffer::new();
    game.render(&mut frame);
    log::debug!("Final frame: {} draw commands", frame.commands.len());

    println!("Simulated {seconds:.0}s over {games_played} game(s)");
    println!("Asteroids destroyed: {destroyed}");
    println!("Best score: {best_score}");
    println!(
        "Current game: score {} lives {} asteroids on field {}",
        game.state.score(),
        game.state.lives(),
        game.state.asteroids.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser backend; the library is the product on wasm
}
