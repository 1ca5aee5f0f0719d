//! Motion integration
//!
//! Velocities are expressed per tick, so positions advance by a fixed step
//! each tick regardless of the frame delta.

use super::state::{Asteroid, Bullet, Ship};
use super::tick::TickInput;
use crate::tuning::Tuning;
use crate::wrap_position;

/// Apply steering, thrust and drag, then move and wrap the ship.
///
/// Dead ships are left untouched.
pub fn update_ship(ship: &mut Ship, input: &TickInput, tuning: &Tuning) {
    if ship.is_dead() {
        return;
    }

    if input.rotate_left {
        ship.rot -= tuning.rotation_speed;
    }
    if input.rotate_right {
        ship.rot += tuning.rotation_speed;
    }

    if input.thrust_forward {
        ship.speed = (ship.speed * (1.0 + tuning.thrust_accel)).clamp(tuning.min_speed, tuning.max_speed);
    }
    if input.thrust_backward {
        ship.speed = (ship.speed * (1.0 - tuning.thrust_decel)).clamp(0.0, tuning.max_speed);
    }

    // Drifting through space slowly bleeds off speed
    ship.speed *= 1.0 - tuning.drag;

    ship.pos += ship.velocity();
    ship.pos = wrap_position(ship.pos, tuning.screen_width, tuning.screen_height);
}

/// Move asteroids along their headings and drop those that left the field
pub fn advance_asteroids(asteroids: &mut Vec<Asteroid>, tuning: &Tuning) {
    for asteroid in asteroids.iter_mut() {
        asteroid.pos += asteroid.velocity();
    }
    asteroids.retain(|a| !tuning.is_out_of_bounds(a.pos));
}

/// Move bullets along their headings and drop those that left the field
pub fn advance_bullets(bullets: &mut Vec<Bullet>, tuning: &Tuning) {
    for bullet in bullets.iter_mut() {
        bullet.start += bullet.heading * bullet.speed;
        bullet.end = bullet.start + bullet.heading * tuning.bullet_length;
    }
    bullets.retain(|b| !tuning.is_out_of_bounds(b.start));
}

/// Upper bound on the ticks a non-colliding bullet can survive.
///
/// Every unit heading moves at least `speed / sqrt(2)` per tick along its
/// dominant axis, and a bullet never has to cover more than the longer
/// screen side plus the margin along that axis.
pub fn max_bullet_lifetime_ticks(tuning: &Tuning) -> u32 {
    let extent = tuning.screen_width.max(tuning.screen_height) + tuning.spawn_margin;
    let per_tick = tuning.bullet_speed / std::f32::consts::SQRT_2;
    (extent / per_tick).ceil() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::AsteroidSize;
    use glam::Vec2;
    use proptest::prelude::*;

    fn thrust() -> TickInput {
        TickInput {
            thrust_forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_rotation_steps() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        let left = TickInput {
            rotate_left: true,
            ..Default::default()
        };
        update_ship(&mut ship, &left, &tuning);
        update_ship(&mut ship, &left, &tuning);
        assert!((ship.rot + 2.0 * tuning.rotation_speed).abs() < 1e-6);
    }

    #[test]
    fn test_thrust_clamps_to_max_speed() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        for _ in 0..200 {
            update_ship(&mut ship, &thrust(), &tuning);
        }
        // Drag is applied after the clamp
        assert!(ship.speed <= tuning.max_speed);
        assert!(ship.speed > tuning.max_speed * (1.0 - tuning.drag) - 1e-4);
    }

    #[test]
    fn test_thrust_lifts_to_min_speed() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        ship.speed = 0.0;
        update_ship(&mut ship, &thrust(), &tuning);
        assert!((ship.speed - tuning.min_speed * (1.0 - tuning.drag)).abs() < 1e-5);
    }

    #[test]
    fn test_reverse_thrust_never_negative() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        let back = TickInput {
            thrust_backward: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            update_ship(&mut ship, &back, &tuning);
        }
        assert!(ship.speed >= 0.0);
        assert!(ship.speed < 0.01);
    }

    #[test]
    fn test_drag_without_input() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        let start = ship.pos;
        update_ship(&mut ship, &TickInput::default(), &tuning);
        let expected_speed = tuning.initial_speed * (1.0 - tuning.drag);
        assert!((ship.speed - expected_speed).abs() < 1e-6);
        assert!((ship.pos - (start + Vec2::Y * expected_speed)).length() < 1e-4);
    }

    #[test]
    fn test_dead_ship_does_not_move() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        ship.death_timer = 1.0;
        let before = ship.clone();
        update_ship(&mut ship, &thrust(), &tuning);
        assert_eq!(ship, before);
    }

    #[test]
    fn test_ship_wraps_to_opposite_edge() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        ship.pos = Vec2::new(640.0, 959.0);
        ship.speed = 4.0;
        update_ship(&mut ship, &TickInput::default(), &tuning);
        assert!(ship.pos.y < 5.0, "expected wrap to top, got {:?}", ship.pos);
    }

    #[test]
    fn test_asteroids_culled_past_margin() {
        let tuning = Tuning::default();
        let mut asteroids = vec![
            Asteroid::new(AsteroidSize::Large, Vec2::new(-99.5, 10.0), Vec2::NEG_X, Vec::new(), &tuning.sizes),
            Asteroid::new(AsteroidSize::Large, Vec2::new(-90.0, 10.0), Vec2::NEG_X, Vec::new(), &tuning.sizes),
        ];
        advance_asteroids(&mut asteroids, &tuning);
        assert_eq!(asteroids.len(), 1);
        assert_eq!(asteroids[0].pos, Vec2::new(-91.0, 10.0));
    }

    #[test]
    fn test_bullet_end_tracks_start() {
        let tuning = Tuning::default();
        let mut bullets = vec![Bullet::new(Vec2::new(100.0, 100.0), 0.0, &tuning)];
        advance_bullets(&mut bullets, &tuning);
        let b = &bullets[0];
        assert!((b.start - Vec2::new(100.0, 104.0)).length() < 1e-4);
        assert!((b.end - b.start - b.heading * tuning.bullet_length).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_ship_stays_on_screen(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            rot in -20.0f32..20.0,
            speed in 0.0f32..6.0,
        ) {
            let tuning = Tuning::default();
            let mut ship = Ship::new(&tuning);
            ship.pos = Vec2::new(x, y);
            ship.rot = rot;
            ship.speed = speed;
            update_ship(&mut ship, &TickInput::default(), &tuning);
            prop_assert!(ship.pos.x >= 0.0 && ship.pos.x < tuning.screen_width);
            prop_assert!(ship.pos.y >= 0.0 && ship.pos.y < tuning.screen_height);
        }

        #[test]
        fn prop_bullet_leaves_within_bound(
            x in 0.0f32..1280.0,
            y in 0.0f32..960.0,
            rot in 0.0f32..std::f32::consts::TAU,
        ) {
            let tuning = Tuning::default();
            let mut bullets = vec![Bullet::new(Vec2::new(x, y), rot, &tuning)];
            let limit = max_bullet_lifetime_ticks(&tuning);
            let mut ticks = 0;
            while !bullets.is_empty() {
                advance_bullets(&mut bullets, &tuning);
                ticks += 1;
                prop_assert!(ticks <= limit, "bullet alive after {} ticks", ticks);
            }
        }
    }
}
