//! Data-driven game balance
//!
//! Every numeric knob the simulation reads lives here instead of being
//! scattered through the tick code. Defaults reproduce the arcade feel; a
//! JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::state::AsteroidSize;

/// Errors produced while loading or validating a [`Tuning`]
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// The tuning file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tuning file is not valid JSON for this schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Per-tier asteroid stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierStats {
    /// Collision radius
    pub hitbox: f32,
    /// Bullet hits needed to destroy
    pub health: u8,
    /// Points awarded on destruction
    pub score: u64,
    /// Distance travelled per tick
    pub speed: f32,
}

/// The single table mapping size tiers to their stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeTable {
    pub small: TierStats,
    pub medium: TierStats,
    pub large: TierStats,
}

impl Default for SizeTable {
    fn default() -> Self {
        Self {
            small: TierStats {
                hitbox: 10.0,
                health: 1,
                score: 100,
                speed: 3.0,
            },
            medium: TierStats {
                hitbox: 25.0,
                health: 2,
                score: 50,
                speed: 2.0,
            },
            large: TierStats {
                hitbox: 40.0,
                health: 3,
                score: 20,
                speed: 1.0,
            },
        }
    }
}

impl SizeTable {
    pub fn stats(&self, size: AsteroidSize) -> TierStats {
        match size {
            AsteroidSize::Small => self.small,
            AsteroidSize::Medium => self.medium,
            AsteroidSize::Large => self.large,
        }
    }
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Distance outside the screen where asteroids spawn and beyond which
    /// asteroids and bullets are culled
    pub spawn_margin: f32,

    // === Ship ===
    /// Radians per tick while a rotate key is held
    pub rotation_speed: f32,
    /// Multiplicative speed-up per tick of forward thrust
    pub thrust_accel: f32,
    /// Multiplicative slow-down per tick of reverse thrust
    pub thrust_decel: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Fraction of speed lost every tick
    pub drag: f32,
    /// Speed the ship starts (and restarts) with
    pub initial_speed: f32,
    pub ship_hitbox: f32,
    /// Seconds added to the death timer when an asteroid hits the ship
    pub death_penalty: f32,
    pub starting_lives: u8,

    // === Bullets ===
    pub bullet_length: f32,
    /// Distance travelled per tick
    pub bullet_speed: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,
    /// Collision radius of the bullet's leading point
    pub bullet_hitbox: f32,

    // === Asteroids ===
    /// Seconds between asteroid spawns
    pub spawn_interval: f32,
    /// Vertex count of generated outlines
    pub asteroid_sides: usize,
    pub sizes: SizeTable,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 1280.0,
            screen_height: 960.0,
            spawn_margin: 100.0,

            rotation_speed: 0.08,
            thrust_accel: 0.15,
            thrust_decel: 0.01,
            min_speed: 2.0,
            max_speed: 6.0,
            drag: 0.01,
            initial_speed: 2.0,
            ship_hitbox: 15.0,
            death_penalty: 5.0,
            starting_lives: 3,

            bullet_length: 30.0,
            bullet_speed: 4.0,
            fire_cooldown: 0.25,
            bullet_hitbox: 2.0,

            spawn_interval: 2.5,
            asteroid_sides: 11,
            sizes: SizeTable::default(),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&contents)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!(
                    "Ignoring tuning file {}: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                })
            }
        }

        fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: format!("must be zero or positive, got {value}"),
                })
            }
        }

        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("spawn_margin", self.spawn_margin)?;
        positive("spawn_interval", self.spawn_interval)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("max_speed", self.max_speed)?;
        positive("death_penalty", self.death_penalty)?;
        positive("ship_hitbox", self.ship_hitbox)?;
        positive("bullet_hitbox", self.bullet_hitbox)?;

        non_negative("rotation_speed", self.rotation_speed)?;
        non_negative("thrust_accel", self.thrust_accel)?;
        non_negative("initial_speed", self.initial_speed)?;
        non_negative("bullet_length", self.bullet_length)?;
        non_negative("fire_cooldown", self.fire_cooldown)?;

        if self.starting_lives == 0 {
            return Err(TuningError::Invalid {
                field: "starting_lives",
                reason: "a game needs at least 1 life".to_string(),
            });
        }

        if !(0.0..1.0).contains(&self.drag) {
            return Err(TuningError::Invalid {
                field: "drag",
                reason: format!("must be in [0, 1), got {}", self.drag),
            });
        }
        if !(0.0..1.0).contains(&self.thrust_decel) {
            return Err(TuningError::Invalid {
                field: "thrust_decel",
                reason: format!("must be in [0, 1), got {}", self.thrust_decel),
            });
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(TuningError::Invalid {
                field: "min_speed",
                reason: format!(
                    "must be in [0, max_speed = {}], got {}",
                    self.max_speed, self.min_speed
                ),
            });
        }
        if self.asteroid_sides < 3 {
            return Err(TuningError::Invalid {
                field: "asteroid_sides",
                reason: format!("an outline needs at least 3 sides, got {}", self.asteroid_sides),
            });
        }
        for size in AsteroidSize::ALL {
            let stats = self.sizes.stats(size);
            if stats.health == 0 {
                return Err(TuningError::Invalid {
                    field: "sizes",
                    reason: format!("{size:?} asteroids need at least 1 health"),
                });
            }
            positive("sizes", stats.hitbox)?;
            non_negative("sizes", stats.speed)?;
        }
        Ok(())
    }

    /// Center of the playfield
    pub fn screen_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// True if `pos` is further than the spawn margin outside the screen
    pub fn is_out_of_bounds(&self, pos: glam::Vec2) -> bool {
        pos.x > self.screen_width + self.spawn_margin
            || pos.x < -self.spawn_margin
            || pos.y > self.screen_height + self.spawn_margin
            || pos.y < -self.spawn_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_table() {
        let sizes = SizeTable::default();
        assert_eq!(sizes.stats(AsteroidSize::Small).score, 100);
        assert_eq!(sizes.stats(AsteroidSize::Medium).health, 2);
        assert_eq!(sizes.stats(AsteroidSize::Large).hitbox, 40.0);
        assert_eq!(sizes.stats(AsteroidSize::Large).speed, 1.0);
    }

    #[test]
    fn test_default_validates() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "spawn_interval": 1.0, "starting_lives": 5 }"#)
            .expect("partial tuning should parse");
        assert_eq!(tuning.spawn_interval, 1.0);
        assert_eq!(tuning.starting_lives, 5);
        assert_eq!(tuning.screen_width, 1280.0);
        assert_eq!(tuning.sizes, SizeTable::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let json = Tuning::default().to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let err = Tuning::from_json(r#"{ "min_speed": 8.0, "max_speed": 6.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "min_speed", .. }));
    }

    #[test]
    fn test_rejects_bad_drag() {
        let err = Tuning::from_json(r#"{ "drag": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "drag", .. }));
    }

    #[test]
    fn test_rejects_negative_death_penalty() {
        let err = Tuning::from_json(r#"{ "death_penalty": -5.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "death_penalty", .. }));
    }

    #[test]
    fn test_rejects_zero_starting_lives() {
        let err = Tuning::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "starting_lives", .. }));
    }

    #[test]
    fn test_rejects_negative_motion_and_hitboxes() {
        for (json, field) in [
            (r#"{ "ship_hitbox": 0.0 }"#, "ship_hitbox"),
            (r#"{ "bullet_hitbox": -1.0 }"#, "bullet_hitbox"),
            (r#"{ "fire_cooldown": -0.5 }"#, "fire_cooldown"),
            (r#"{ "initial_speed": -2.0 }"#, "initial_speed"),
            (r#"{ "rotation_speed": -0.1 }"#, "rotation_speed"),
            (r#"{ "thrust_accel": -0.2 }"#, "thrust_accel"),
        ] {
            match Tuning::from_json(json) {
                Err(TuningError::Invalid { field: got, .. }) => assert_eq!(got, field, "{json}"),
                other => panic!("{json} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_negative_tier_speed() {
        let mut tuning = Tuning::default();
        tuning.sizes.medium.speed = -1.0;
        assert!(matches!(
            tuning.validate().unwrap_err(),
            TuningError::Invalid { field: "sizes", .. }
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            Tuning::from_json("not json").unwrap_err(),
            TuningError::Parse(_)
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("/nonexistent/asteroids-tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_out_of_bounds() {
        let tuning = Tuning::default();
        assert!(!tuning.is_out_of_bounds(glam::Vec2::new(-100.0, 0.0)));
        assert!(tuning.is_out_of_bounds(glam::Vec2::new(-100.5, 0.0)));
        assert!(tuning.is_out_of_bounds(glam::Vec2::new(0.0, 1060.5)));
        assert!(!tuning.is_out_of_bounds(glam::Vec2::new(1380.0, 1060.0)));
    }
}
