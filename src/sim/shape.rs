//! Irregular asteroid outlines
//!
//! Points are placed around a circle at evenly divided angles, each nudged
//! by a random angular jitter and given a random radius inside a band.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

/// Inner edge of the outline band as a fraction of the hitbox
pub const OUTLINE_MIN_FACTOR: f32 = 0.7;
/// Outer edge of the outline band as a fraction of the hitbox
pub const OUTLINE_MAX_FACTOR: f32 = 1.1;
/// Fraction of one angular step a vertex may drift by
const ANGLE_JITTER: f32 = 0.25;

/// Generate an irregular `sides`-gon with vertex radii in `[min_radius, max_radius]`
pub fn irregular_polygon<R: Rng + ?Sized>(
    rng: &mut R,
    sides: usize,
    min_radius: f32,
    max_radius: f32,
) -> Vec<Vec2> {
    let step = TAU / sides as f32;

    (0..sides)
        .map(|i| {
            let jitter = (rng.random::<f32>() - 0.5) * step * ANGLE_JITTER;
            let angle = step * i as f32 + jitter;
            let radius = min_radius + rng.random::<f32>() * (max_radius - min_radius);
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Outline for an asteroid with the given hitbox
pub fn asteroid_outline<R: Rng + ?Sized>(rng: &mut R, sides: usize, hitbox: f32) -> Vec<Vec2> {
    irregular_polygon(
        rng,
        sides,
        hitbox * OUTLINE_MIN_FACTOR,
        hitbox * OUTLINE_MAX_FACTOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_vertex_count_and_band() {
        let mut rng = Pcg32::seed_from_u64(3);
        let points = irregular_polygon(&mut rng, 11, 20.0, 40.0);
        assert_eq!(points.len(), 11);
        for p in &points {
            let r = p.length();
            assert!((20.0 - 1e-3..=40.0 + 1e-3).contains(&r), "radius {r} out of band");
        }
    }

    #[test]
    fn test_vertices_stay_ordered_by_angle() {
        let mut rng = Pcg32::seed_from_u64(11);
        let points = irregular_polygon(&mut rng, 8, 1.0, 2.0);
        let angles: Vec<f32> = points
            .iter()
            .map(|p| p.y.atan2(p.x).rem_euclid(TAU))
            .collect();
        // Jitter is a fraction of one step, so neighbours never swap
        for pair in angles[1..].windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
