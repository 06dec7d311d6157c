//! Read-only scene building
//!
//! Walks a `GameState` and hands rectangles and HUD labels to a `Canvas`.
//! Whatever owns the window implements `Canvas`; `Scene` is a recording
//! implementation that can also emit vertex data.

use serde::Serialize;

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Rect};

/// A text label in window pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub color: [f32; 4],
}

impl TextLabel {
    fn hud(text: String, x: f32, y: f32, scale: f32) -> Self {
        Self {
            text,
            x,
            y,
            scale,
            color: colors::HUD_TEXT,
        }
    }
}

/// Anything that can draw a colored rectangle and a text label
pub trait Canvas {
    fn fill_rect(&mut self, rect: &Rect);
    fn draw_text(&mut self, label: &TextLabel);
}

/// HUD placement (pixels in an 800x600 window, top-left origin)
const SCORE_POS: (f32, f32) = (0.5, 0.5);
const LIVES_POS: (f32, f32) = (670.0, 0.5);
const GAME_OVER_POS: (f32, f32) = (250.0, 300.0);
const HUD_SCALE: f32 = 2.0;
const GAME_OVER_SCALE: f32 = 4.0;

pub fn score_label(score: u64) -> TextLabel {
    TextLabel::hud(format!("Score: {score}"), SCORE_POS.0, SCORE_POS.1, HUD_SCALE)
}

pub fn lives_label(lives: u32) -> TextLabel {
    TextLabel::hud(format!("Lives: {lives}"), LIVES_POS.0, LIVES_POS.1, HUD_SCALE)
}

/// Draw one frame: paddle, ball, active bricks, then the HUD
pub fn draw(state: &GameState, canvas: &mut impl Canvas) {
    for segment in state.paddle().segments() {
        canvas.fill_rect(segment);
    }
    canvas.fill_rect(state.ball());
    for brick in state.active_bricks() {
        canvas.fill_rect(&brick.rect);
    }

    canvas.draw_text(&score_label(state.score()));
    canvas.draw_text(&lives_label(state.lives()));
    if state.is_game_over() {
        canvas.draw_text(&TextLabel::hud(
            "GAME OVER!".to_string(),
            GAME_OVER_POS.0,
            GAME_OVER_POS.1,
            GAME_OVER_SCALE,
        ));
    }
}

/// A recorded frame
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    pub rects: Vec<Rect>,
    pub labels: Vec<TextLabel>,
}

impl Canvas for Scene {
    fn fill_rect(&mut self, rect: &Rect) {
        self.rects.push(*rect);
    }

    fn draw_text(&mut self, label: &TextLabel) {
        self.labels.push(label.clone());
    }
}

impl Scene {
    /// Record a full frame of `state`
    pub fn capture(state: &GameState) -> Self {
        let mut scene = Self::default();
        draw(state, &mut scene);
        scene
    }

    /// Triangle list for every recorded rectangle
    pub fn vertices(&self) -> Vec<Vertex> {
        self.rects.iter().flat_map(Vertex::quad).collect()
    }

    /// Raw bytes of `vertices()`, ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};
    use glam::Vec2;

    #[test]
    fn test_capture_new_game() {
        let state = GameState::default();
        let scene = Scene::capture(&state);

        // 3 paddle segments + ball + 132 bricks
        assert_eq!(scene.rects.len(), 136);
        assert_eq!(scene.rects[3], *state.ball());
        assert_eq!(scene.labels.len(), 2);
        assert_eq!(scene.labels[0].text, "Score: 0");
        assert_eq!(scene.labels[1].text, "Lives: 3");
        assert_eq!(scene.labels[1].x, 670.0);
    }

    #[test]
    fn test_inactive_bricks_not_drawn() {
        let mut state = GameState::default();
        state.bricks[0].active = false;
        state.bricks[5].active = false;
        let scene = Scene::capture(&state);
        assert_eq!(scene.rects.len(), 134);
        assert!(!scene.rects.contains(&state.bricks()[0].rect));
    }

    #[test]
    fn test_game_over_label() {
        let mut state = GameState::default();
        state.lives = 1;
        state.ball.pos = Vec2::new(0.5, -0.99);
        tick(&mut state, &TickInput::default(), 0.1);
        assert!(state.is_game_over());

        let scene = Scene::capture(&state);
        let last = scene.labels.last().unwrap();
        assert_eq!(last.text, "GAME OVER!");
        assert_eq!(last.scale, 4.0);
        assert_eq!(scene.labels[1].text, "Lives: 0");
    }

    #[test]
    fn test_vertices() {
        let state = GameState::default();
        let scene = Scene::capture(&state);
        let vertices = scene.vertices();
        assert_eq!(vertices.len(), scene.rects.len() * 6);

        // Ball quad starts at its bottom-left corner with its color
        let ball = &vertices[3 * 6];
        assert_eq!(ball.position, [0.15, -0.15]);
        assert_eq!(ball.color, [1.0, 0.0, 1.0, 1.0]);

        let bytes = scene.vertex_bytes();
        assert_eq!(bytes.len(), vertices.len() * std::mem::size_of::<Vertex>());
    }
}
