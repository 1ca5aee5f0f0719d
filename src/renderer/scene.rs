//! Scene and HUD drawing
//!
//! Reads the game state, never writes it.

use glam::Vec2;

use super::shapes::ship_outline;
use super::{DIM, RED, Renderer, Transform, WHITE};
use crate::consts::{SHIP_SCALE, THICKNESS};
use crate::sim::GameState;

const HUD_TEXT_SIZE: f32 = 30.0;
const HUD_MARGIN: f32 = 16.0;
const HUD_TOP: f32 = 20.0;
const GAME_OVER_SIZE: f32 = 40.0;
const PROMPT_SIZE: f32 = 20.0;

/// Presentation switches that do not affect the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOptions {
    /// Draw the exhaust flame (thrust held this frame)
    pub thrusting: bool,
    /// Overlay collision circles
    pub show_hitboxes: bool,
}

/// Draw one frame of `state`
pub fn draw_scene<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R, options: SceneOptions) {
    let tuning = &state.tuning;

    if !state.ship.is_dead() {
        let transform = Transform {
            origin: state.ship.pos,
            scale: SHIP_SCALE,
            rotation: state.ship.rot,
        };
        renderer.draw_polyline(ship_outline(options.thrusting), transform, THICKNESS, WHITE);
        if options.show_hitboxes {
            renderer.draw_circle(state.ship.pos, tuning.ship_hitbox, DIM);
        }
    }

    for asteroid in &state.asteroids {
        renderer.draw_polyline(&asteroid.outline, Transform::at(asteroid.pos), THICKNESS, WHITE);
        if options.show_hitboxes {
            renderer.draw_circle(asteroid.pos, asteroid.hitbox, DIM);
        }
    }

    for bullet in &state.bullets {
        renderer.draw_line(bullet.start, bullet.end, THICKNESS, WHITE);
    }

    draw_hud(state, renderer);

    if state.is_game_over() {
        draw_game_over(state, renderer);
    }
}

fn draw_hud<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let width = state.tuning.screen_width;

    let score = format!("Score: {}", state.score());
    renderer.draw_text(&score, Vec2::new(HUD_MARGIN, HUD_TOP), HUD_TEXT_SIZE, WHITE);

    let lives = format!("Lives: {}", state.lives());
    let lives_width = renderer.measure_text(&lives, HUD_TEXT_SIZE);
    renderer.draw_text(
        &lives,
        Vec2::new(width - HUD_MARGIN - lives_width, HUD_TOP),
        HUD_TEXT_SIZE,
        WHITE,
    );

    if state.ship.is_dead() && !state.is_game_over() {
        let respawn = format!("Respawning in {}", state.ship.death_timer.ceil() as u32);
        let w = renderer.measure_text(&respawn, HUD_TEXT_SIZE);
        let center = state.tuning.screen_center();
        renderer.draw_text(&respawn, Vec2::new(center.x - w / 2.0, center.y), HUD_TEXT_SIZE, WHITE);
    }
}

fn draw_game_over<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let center = state.tuning.screen_center();

    let title = "GAME OVER";
    let w = renderer.measure_text(title, GAME_OVER_SIZE);
    renderer.draw_text(
        title,
        Vec2::new(center.x - w / 2.0, center.y - GAME_OVER_SIZE / 2.0),
        GAME_OVER_SIZE,
        RED,
    );

    let prompt = "Press ENTER to Restart";
    let w = renderer.measure_text(prompt, PROMPT_SIZE);
    renderer.draw_text(prompt, Vec2::new(center.x - w / 2.0, center.y + 30.0), PROMPT_SIZE, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::CommandBuffer;
    use crate::sim::{Asteroid, AsteroidSize, Bullet, GamePhase};

    #[test]
    fn test_draws_every_entity() {
        let mut state = GameState::new(1);
        let outline = vec![Vec2::X, Vec2::Y, Vec2::NEG_X];
        let a = Asteroid::new(AsteroidSize::Small, Vec2::new(50.0, 50.0), Vec2::X, outline, &state.tuning.sizes);
        state.asteroids.push(a);
        let b = Bullet::new(Vec2::new(10.0, 10.0), 0.0, &state.tuning);
        state.bullets.push(b);

        let mut buf = CommandBuffer::new();
        draw_scene(&state, &mut buf, SceneOptions::default());
        // Ship + one asteroid
        assert_eq!(buf.polyline_count(), 2);
        assert_eq!(buf.line_count(), 1);
        let texts: Vec<&str> = buf.texts().collect();
        assert_eq!(texts, vec!["Score: 0", "Lives: 3"]);
    }

    #[test]
    fn test_dead_ship_hidden_and_countdown_shown() {
        let mut state = GameState::new(1);
        state.ship.death_timer = 4.2;
        let mut buf = CommandBuffer::new();
        draw_scene(&state, &mut buf, SceneOptions::default());
        assert_eq!(buf.polyline_count(), 0);
        assert!(buf.texts().any(|t| t == "Respawning in 5"));
    }

    #[test]
    fn test_countdown_rounds_up_last_fraction() {
        let mut state = GameState::new(1);
        state.ship.death_timer = 0.01;
        let mut buf = CommandBuffer::new();
        draw_scene(&state, &mut buf, SceneOptions::default());
        assert!(buf.texts().any(|t| t == "Respawning in 1"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.scoreboard.lives = 0;
        let mut buf = CommandBuffer::new();
        draw_scene(&state, &mut buf, SceneOptions::default());
        let texts: Vec<&str> = buf.texts().collect();
        assert!(texts.contains(&"GAME OVER"));
        assert!(texts.contains(&"Press ENTER to Restart"));
        assert!(texts.contains(&"Lives: 0"));
    }

    #[test]
    fn test_hitbox_overlay() {
        let state = GameState::new(1);
        let mut buf = CommandBuffer::new();
        let options = SceneOptions {
            show_hitboxes: true,
            ..Default::default()
        };
        draw_scene(&state, &mut buf, options);
        assert!(buf.commands.iter().any(|c| matches!(
            c,
            crate::renderer::DrawCommand::Circle { radius, .. } if *radius == state.tuning.ship_hitbox
        )));
    }
}
