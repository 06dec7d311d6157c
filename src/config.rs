//! Game configuration
//!
//! Every constant the simulation depends on lives here, so independent
//! `GameState`s can run side by side with different tunings.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rgb;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Immutable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    /// Left/bottom edge of the playfield
    pub arena_min: f32,
    /// Right/top edge of the playfield
    pub arena_max: f32,

    // === Ball ===
    pub ball_size: Vec2,
    pub ball_color: Rgb,
    /// Where the ball starts and where it returns after being lost
    pub ball_spawn: Vec2,
    pub ball_launch_velocity: Vec2,
    pub ball_respawn_velocity: Vec2,

    // === Paddle ===
    /// Bottom-left corner of the leftmost segment
    pub paddle_origin: Vec2,
    pub paddle_segment_size: Vec2,
    /// Horizontal speed while a move key is held
    pub paddle_speed: f32,
    pub paddle_colors: [Rgb; 3],
    /// Fixed outgoing ball velocity per segment (left, middle, right)
    pub paddle_rebounds: [Vec2; 3],

    // === Bricks ===
    pub brick_size: Vec2,
    pub brick_gap: f32,
    /// Rows stop once their top edge would drop below this
    pub brick_floor: f32,

    pub initial_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_min: ARENA_MIN,
            arena_max: ARENA_MAX,

            ball_size: Vec2::new(BALL_WIDTH, BALL_HEIGHT),
            ball_color: Rgb(255, 0, 255),
            ball_spawn: Vec2::from(BALL_SPAWN),
            ball_launch_velocity: Vec2::from(BALL_LAUNCH_VELOCITY),
            ball_respawn_velocity: Vec2::from(BALL_RESPAWN_VELOCITY),

            paddle_origin: Vec2::from(PADDLE_ORIGIN),
            paddle_segment_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_colors: [Rgb(233, 245, 66), Rgb(66, 245, 84), Rgb(0, 149, 255)],
            paddle_rebounds: [
                Vec2::new(-PADDLE_REBOUND, PADDLE_REBOUND),
                Vec2::new(0.0, PADDLE_REBOUND),
                Vec2::new(PADDLE_REBOUND, PADDLE_REBOUND),
            ],

            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_gap: BRICK_GAP,
            brick_floor: BRICK_FLOOR,

            initial_lives: INITIAL_LIVES,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_max <= self.arena_min {
            return Err(ConfigError::Invalid(format!(
                "arena_max ({}) must be greater than arena_min ({})",
                self.arena_max, self.arena_min
            )));
        }

        for (name, size) in [
            ("ball_size", self.ball_size),
            ("paddle_segment_size", self.paddle_segment_size),
            ("brick_size", self.brick_size),
        ] {
            if !(size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive on both axes, got {size}"
                )));
            }
        }

        if self.brick_gap < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "brick_gap must not be negative, got {}",
                self.brick_gap
            )));
        }
        if self.paddle_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "paddle_speed must be positive, got {}",
                self.paddle_speed
            )));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::Invalid("initial_lives must be at least 1".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.paddle_rebounds[0], Vec2::new(-0.2, 0.2));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "initial_lives": 5, "brick_gap": 0.0 }"#).unwrap();
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.brick_gap, 0.0);
        assert_eq!(config.ball_spawn, Vec2::new(0.15, -0.15));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.brick_size = Vec2::new(0.15, 0.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.initial_lives = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.arena_min = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
