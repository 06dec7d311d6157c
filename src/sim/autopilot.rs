//! Scripted input that keeps the paddle under the ball
//!
//! Drives the headless demo; a real host would read the keyboard instead.

use super::state::GameState;
use super::tick::TickInput;

/// Choose left/right so the paddle's center chases the ball's center
///
/// Within a quarter segment of the ball the paddle holds still, which keeps
/// it from jittering around the target.
pub fn steer(state: &GameState) -> TickInput {
    let dead_zone = state.config().paddle_segment_size.x / 4.0;
    let offset = state.ball().center_x() - state.paddle().center_x();

    TickInput {
        move_left: offset < -dead_zone,
        move_right: offset > dead_zone,
        quit: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;
    use glam::Vec2;

    #[test]
    fn test_steer_toward_ball() {
        let mut state = GameState::default();

        state.ball.pos = Vec2::new(0.6, 0.0);
        let input = steer(&state);
        assert!(input.move_right && !input.move_left);

        state.ball.pos = Vec2::new(-0.6, 0.0);
        let input = steer(&state);
        assert!(input.move_left && !input.move_right);

        // Spawn point is within the dead zone of a centered paddle
        state.ball.pos = Vec2::new(-0.01, 0.0);
        assert_eq!(steer(&state), TickInput::default());
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::default();
        for _ in 0..120 * 60 {
            let input = steer(&state);
            tick(&mut state, &input, crate::consts::SIM_DT);
            if state.score() > 0 {
                break;
            }
        }
        assert!(state.score() > 0);
        assert_eq!(state.lives(), 3);
    }
}
