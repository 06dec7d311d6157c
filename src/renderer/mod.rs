//! Presentation layer
//!
//! Turns the simulation into rectangles, HUD text and vertex data. Drawing
//! them on screen belongs to the host.

pub mod scene;
pub mod vertex;

pub use scene::{Canvas, Scene, TextLabel, draw};
pub use vertex::Vertex;
