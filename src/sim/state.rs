//! Game state and core simulation types
//!
//! `GameState` exclusively owns the ball, paddle, bricks, score and lives.
//! Everything outside `sim` reads it through accessors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, Rgb};
use crate::config::{ConfigError, GameConfig};

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side or the top wall
    WallBounce,
    /// Ball rebounded off a paddle segment (0 = left, 1 = middle, 2 = right)
    PaddleBounce { segment: usize },
    /// Brick at this index was deactivated
    BrickDestroyed { index: usize },
    /// Ball fell through the bottom and was respawned
    BallLost,
    /// Lives reached zero
    GameOver,
}

/// The player's paddle: three contiguous segments sharing one velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    segments: [Rect; 3],
    /// Horizontal velocity shared by every segment
    dx: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let size = config.paddle_segment_size;
        let segments = std::array::from_fn(|i| {
            let pos = config.paddle_origin + Vec2::new(size.x * i as f32, 0.0);
            Rect::new(pos, size, config.paddle_colors[i])
        });
        Self { segments, dx: 0.0 }
    }

    pub fn segments(&self) -> &[Rect; 3] {
        &self.segments
    }

    pub fn velocity(&self) -> f32 {
        self.dx
    }

    /// Set the shared horizontal velocity (paddles never move vertically)
    pub fn set_velocity(&mut self, dx: f32) {
        self.dx = dx;
        for segment in &mut self.segments {
            segment.vel = Vec2::new(dx, 0.0);
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        for segment in &mut self.segments {
            segment.integrate(dt);
        }
    }

    /// Horizontal midpoint of the whole paddle
    pub fn center_x(&self) -> f32 {
        (self.segments[0].left() + self.segments[2].right()) / 2.0
    }

    #[cfg(test)]
    pub(crate) fn translate(&mut self, offset: Vec2) {
        for segment in &mut self.segments {
            segment.pos += offset;
        }
    }
}

/// A brick (inactive once hit, never removed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

/// Lay out the brick wall column by column, top row first
///
/// The red channel fades per column while blue and green ramp up per brick
/// across the whole grid, clamped to 0..=255.
pub fn build_bricks(config: &GameConfig) -> Vec<Brick> {
    let size = config.brick_size;
    let step = size + Vec2::splat(config.brick_gap);
    let first_top = config.arena_max - 2.0 * step.y;

    let columns: Vec<f32> = (0..)
        .map(|col| config.arena_min + col as f32 * step.x)
        .take_while(|&x| x <= config.arena_max)
        .collect();
    let row_tops: Vec<f32> = (0..)
        .map(|row| first_top - row as f32 * step.y)
        .take_while(|&top| top >= config.brick_floor)
        .collect();

    let mut bricks = Vec::with_capacity(columns.len() * row_tops.len());
    let (mut r, mut g, mut b) = (255, 0, 0);
    for &x in &columns {
        for &top in &row_tops {
            b += 3;
            let rect = Rect::new(Vec2::new(x, top - size.y), size, Rgb::saturating(r, g, b));
            bricks.push(Brick { rect, active: true });
            g += 6;
        }
        r -= 20;
    }
    bricks
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) ball: Rect,
    pub(crate) paddle: Paddle,
    /// Fixed after construction; only `active` flags change
    pub(crate) bricks: Vec<Brick>,
    pub(crate) score: u64,
    pub(crate) lives: u32,
    /// Terminal once set
    pub(crate) game_over: bool,
    /// Events from the most recent tick
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl GameState {
    /// Create a new game from a validated config
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let ball = Rect::new(config.ball_spawn, config.ball_size, config.ball_color)
            .with_velocity(config.ball_launch_velocity);
        let paddle = Paddle::new(&config);
        let bricks = build_bricks(&config);
        log::info!(
            "New game: {} bricks, {} lives",
            bricks.len(),
            config.initial_lives
        );

        Self {
            lives: config.initial_lives,
            config,
            ball,
            paddle,
            bricks,
            score: 0,
            game_over: false,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ball(&self) -> &Rect {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// All bricks in construction order, destroyed ones included
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn active_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.active)
    }

    pub fn active_brick_count(&self) -> usize {
        self.active_bricks().count()
    }

    /// True once every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.active_brick_count() == 0
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// What happened during the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Put the ball back at the spawn point and charge a life
    ///
    /// Lives never go below zero; the game-over flag is raised once.
    pub(crate) fn lose_ball(&mut self) {
        self.ball.pos = self.config.ball_spawn;
        self.ball.vel = self.config.ball_respawn_velocity;
        self.events.push(GameEvent::BallLost);

        if self.lives > 0 {
            self.lives -= 1;
            log::debug!("Ball lost, {} lives left", self.lives);
        }
        if self.lives == 0 && !self.game_over {
            self.game_over = true;
            self.events.push(GameEvent::GameOver);
            log::info!("Game over, final score {}", self.score);
        }
    }
}
