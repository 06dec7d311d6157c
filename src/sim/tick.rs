//! Per-frame simulation step
//!
//! Advances the world by the host's elapsed time and resolves at most one
//! collision per frame.

use super::collision::{Arena, Hit, check_brick, check_paddle, check_wall};
use super::state::{GameEvent, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Escape / window close
    pub quit: bool,
}

/// Whether the host should keep running frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// A collision found by one of the probes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Wall(Hit),
    /// Paddle segment index, left to right
    Paddle(usize),
    Brick { index: usize, hit: Hit },
}

/// A collision check over the whole state
pub type Probe = fn(&GameState) -> Option<Contact>;

/// Collision probes in priority order. The first contact found is the only
/// one resolved that frame.
pub const PROBES: [Probe; 3] = [probe_walls, probe_paddle, probe_bricks];

fn probe_walls(state: &GameState) -> Option<Contact> {
    let arena = Arena {
        min: state.config.arena_min,
        max: state.config.arena_max,
    };
    check_wall(&state.ball, arena).map(Contact::Wall)
}

fn probe_paddle(state: &GameState) -> Option<Contact> {
    check_paddle(&state.ball, state.paddle.segments()).map(Contact::Paddle)
}

/// Scan active bricks in collection order, stopping at the first hit
fn probe_bricks(state: &GameState) -> Option<Contact> {
    state
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, brick)| brick.active)
        .find_map(|(index, brick)| {
            check_brick(&state.ball, &brick.rect).map(|hit| Contact::Brick { index, hit })
        })
}

/// Run the probes in order and return the first contact
pub fn find_contact(state: &GameState) -> Option<Contact> {
    PROBES.iter().find_map(|probe| probe(state))
}

fn apply_contact(state: &mut GameState, contact: Contact) {
    match contact {
        Contact::Wall(hit) => {
            state.ball.vel = hit.reflect(state.ball.vel);
            state.events.push(GameEvent::WallBounce);
        }
        Contact::Paddle(segment) => {
            // Fixed rebound per segment, incoming velocity is discarded
            state.ball.vel = state.config.paddle_rebounds[segment];
            state.events.push(GameEvent::PaddleBounce { segment });
        }
        Contact::Brick { index, hit } => {
            state.ball.vel = hit.reflect(state.ball.vel);
            state.bricks[index].active = false;
            state.score += 1;
            state.events.push(GameEvent::BrickDestroyed { index });
            log::debug!("Brick {} destroyed ({:?}), score {}", index, hit, state.score);
        }
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    state.events.clear();

    if input.quit {
        return TickOutcome::Quit;
    }

    // Game over freezes everything
    if state.game_over {
        return TickOutcome::Continue;
    }

    let speed = state.config.paddle_speed;
    let dx = if input.move_left {
        -speed
    } else if input.move_right {
        speed
    } else {
        0.0
    };
    state.paddle.set_velocity(dx);

    state.paddle.integrate(dt);
    state.ball.integrate(dt);

    if let Some(contact) = find_contact(state) {
        apply_contact(state, contact);
    }

    if state.ball.bottom() <= state.config.arena_min {
        state.lose_ball();
    }

    TickOutcome::Continue
}
