//! Keyboard input tracking.

use std::collections::HashSet;

pub use winit::keyboard::KeyCode;

/// Tracks the current state of the keyboard.
///
/// Held keys drive the free camera every tick; just-pressed keys drive
/// one-shot actions like toggles and camera switches.
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Keys that were just pressed this frame
    just_pressed_keys: HashSet<KeyCode>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the beginning of each frame to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.just_pressed_keys.clear();
    }

    /// Handle a key press event.
    pub fn on_key_pressed(&mut self, key: KeyCode) {
        if self.pressed_keys.insert(key) {
            self.just_pressed_keys.insert(key);
        }
    }

    /// Handle a key release event.
    pub fn on_key_released(&mut self, key: KeyCode) {
        self.pressed_keys.remove(&key);
    }

    /// Check if a key is currently held down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if a key was just pressed this frame.
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed_keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        input.on_key_pressed(KeyCode::KeyA);
        assert!(input.is_key_pressed(KeyCode::KeyA));

        input.on_key_released(KeyCode::KeyA);
        assert!(!input.is_key_pressed(KeyCode::KeyA));
    }

    #[test]
    fn test_just_pressed_lasts_one_frame() {
        let mut input = InputState::new();
        input.on_key_pressed(KeyCode::ArrowUp);
        assert!(input.is_key_just_pressed(KeyCode::ArrowUp));

        input.begin_frame();
        assert!(!input.is_key_just_pressed(KeyCode::ArrowUp));
        // still held, though
        assert!(input.is_key_pressed(KeyCode::ArrowUp));
    }

    #[test]
    fn test_key_repeat_is_not_just_pressed() {
        let mut input = InputState::new();
        input.on_key_pressed(KeyCode::KeyF);
        input.begin_frame();
        // OS-level auto-repeat delivers the same press again
        input.on_key_pressed(KeyCode::KeyF);
        assert!(!input.is_key_just_pressed(KeyCode::KeyF));
    }
}
