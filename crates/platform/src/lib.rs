//! Platform layer: windowing and input.
//!
//! Thin wrappers around winit so the rest of the workspace never touches
//! windowing types directly.

pub mod input;
pub mod window;

pub use input::{InputState, KeyCode};
pub use window::Window;
