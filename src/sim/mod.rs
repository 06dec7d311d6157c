//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only advances through `tick`
//! - Stable iteration order (bricks by construction index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Arena, Hit, check_brick, check_paddle, check_wall};
pub use rect::{Rect, Rgb};
pub use state::{Brick, GameEvent, GameState, Paddle};
pub use tick::{Contact, PROBES, TickInput, TickOutcome, find_contact, tick};
