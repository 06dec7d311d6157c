//! Axis-aligned rectangle geometry for the ball, paddle segments and bricks
//!
//! Positions are the bottom-left corner in normalized space ([-1, 1] per axis).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color tag, converted to floats only when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from unclamped channel values (anything outside 0..=255 saturates)
    pub fn saturating(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Self(clamp(r), clamp(g), clamp(b))
    }

    /// RGBA floats in [0, 1] for vertex data
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

/// A moving, colored axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width and height, both positive
    pub size: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2, color: Rgb) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "rect size must be positive");
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            color,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal midpoint
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Vertical midpoint
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// True if `x` lies within [left, right]
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }

    /// True if `y` lies within [bottom, top]
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.bottom() && y <= self.top()
    }

    /// Explicit Euler step, each axis independently
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}
