//! Brick Breaker - a three-segment paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state)
//! - `config`: Immutable game constants, loadable from JSON
//! - `renderer`: Read-only scene building for whatever host draws the game

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the native demo loop
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Arena bounds (normalized device coordinates)
    pub const ARENA_MIN: f32 = -1.0;
    pub const ARENA_MAX: f32 = 1.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 0.15;
    pub const BRICK_HEIGHT: f32 = 0.05;
    pub const BRICK_GAP: f32 = 0.02;
    /// Lowest allowed top edge for a brick row
    pub const BRICK_FLOOR: f32 = 0.1;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = 0.025;
    pub const BALL_HEIGHT: f32 = 0.025;
    pub const BALL_SPAWN: (f32, f32) = (0.15, -0.15);
    /// Velocity at session start
    pub const BALL_LAUNCH_VELOCITY: (f32, f32) = (0.0, -0.3);
    /// Velocity after the ball is lost and respawned
    pub const BALL_RESPAWN_VELOCITY: (f32, f32) = (0.0, -0.2);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.2;
    pub const PADDLE_HEIGHT: f32 = 0.05;
    pub const PADDLE_ORIGIN: (f32, f32) = (-0.3, -0.8);
    pub const PADDLE_SPEED: f32 = 0.5;
    /// Outgoing speed per axis after a paddle hit
    pub const PADDLE_REBOUND: f32 = 0.2;

    pub const INITIAL_LIVES: u32 = 3;
}
