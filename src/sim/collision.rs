//! Collision classification between the ball and walls, paddle and bricks
//!
//! Every check compares the ball's own edges against the target's edges and
//! is pure. Deciding which check wins in a frame is up to `tick`.
//!
//! The exact-equality corner branches only fire when the ball sits precisely
//! on a corner, which continuous motion almost never produces.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Which velocity components a hit reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hit {
    /// Side contact, negates dx
    Horizontal,
    /// Top/bottom contact, negates dy
    Vertical,
    /// Exact corner contact, negates both
    Corner,
}

impl Hit {
    /// Reflect a velocity according to the hit kind
    #[inline]
    pub fn reflect(self, vel: Vec2) -> Vec2 {
        match self {
            Hit::Horizontal => Vec2::new(-vel.x, vel.y),
            Hit::Vertical => Vec2::new(vel.x, -vel.y),
            Hit::Corner => -vel,
        }
    }
}

/// Playfield bounds the ball bounces inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub min: f32,
    pub max: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            min: crate::consts::ARENA_MIN,
            max: crate::consts::ARENA_MAX,
        }
    }
}

/// Ball against the left, right and top walls
///
/// The bottom edge is not a wall: falling through it costs a life instead.
pub fn check_wall(ball: &Rect, arena: Arena) -> Option<Hit> {
    let inside_vertically = ball.top() < arena.max && ball.bottom() > arena.min;
    let at_side = ball.right() >= arena.max || ball.left() <= arena.min;
    if at_side && inside_vertically {
        return Some(Hit::Horizontal);
    }

    let inside_horizontally = ball.left() > arena.min && ball.right() < arena.max;
    if ball.top() >= arena.max && inside_horizontally {
        return Some(Hit::Vertical);
    }

    let flush_top = ball.top() == arena.max;
    if flush_top && (ball.right() == arena.max || ball.left() == arena.min) {
        return Some(Hit::Corner);
    }

    None
}

/// Ball against the paddle segments, left to right, first match wins
///
/// A segment is hit when the ball's horizontal midpoint is over it and the
/// ball's bottom has reached its top edge. How far below the top the ball is
/// does not matter, so a ball already under the paddle still counts.
pub fn check_paddle(ball: &Rect, segments: &[Rect]) -> Option<usize> {
    let mid_x = ball.center_x();
    segments
        .iter()
        .position(|segment| segment.spans_x(mid_x) && ball.bottom() <= segment.top())
}

/// Ball against a single brick
pub fn check_brick(ball: &Rect, brick: &Rect) -> Option<Hit> {
    let side_edge_inside = brick.spans_x(ball.left()) || brick.spans_x(ball.right());
    if side_edge_inside && brick.spans_y(ball.center_y()) {
        return Some(Hit::Horizontal);
    }

    let cap_edge_inside = brick.spans_y(ball.bottom()) || brick.spans_y(ball.top());
    if cap_edge_inside && brick.spans_x(ball.center_x()) {
        return Some(Hit::Vertical);
    }

    // Ball corner resting exactly on a brick corner, diagonally outside it
    let touching_corner = (ball.left() == brick.right() && ball.bottom() == brick.top())
        || (ball.left() == brick.right() && ball.top() == brick.bottom())
        || (ball.right() == brick.left() && ball.top() == brick.bottom())
        || (ball.right() == brick.left() && ball.bottom() == brick.top());
    if touching_corner {
        return Some(Hit::Corner);
    }

    None
}
