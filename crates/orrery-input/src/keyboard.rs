//! Frame-coherent keyboard tracker.
//!
//! Keys are tracked by physical code so WASD navigation sits under the same
//! fingers on every layout.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Platform-independent key event, used by tests and scripted input.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key.
    pub key: PhysicalKey,
    /// Press or release.
    pub state: ElementState,
    /// OS auto-repeat.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A non-repeat press of `code`.
    pub fn press(code: KeyCode) -> Self {
        Self {
            key: PhysicalKey::Code(code),
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A release of `code`.
    pub fn release(code: KeyCode) -> Self {
        Self {
            key: PhysicalKey::Code(code),
            state: ElementState::Released,
            repeat: false,
        }
    }
}

/// Which keys are held, and which went down during the current frame.
///
/// Feed events with [`process_event`](Self::process_event), read with
/// [`is_held`](Self::is_held), then call
/// [`clear_transients`](Self::clear_transients) once the frame is consumed.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
}

impl KeyboardState {
    /// No keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a winit key event.
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Apply a raw key event. Repeats and unidentified keys are ignored.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        let PhysicalKey::Code(code) = event.key else {
            return;
        };
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.held.insert(code);
                self.pressed_this_frame.insert(code);
            }
            ElementState::Released => {
                self.held.remove(&code);
            }
        }
    }

    /// Whether `code` is currently down.
    ///
    /// A key pressed and released within one frame still reads as held for
    /// that frame, so short taps are never lost between samples.
    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code) || self.pressed_this_frame.contains(&code)
    }

    /// Whether `code` went down during this frame.
    #[must_use]
    pub fn pressed_this_frame(&self, code: KeyCode) -> bool {
        self.pressed_this_frame.contains(&code)
    }

    /// Forget every key, e.g. when the window loses focus and releases
    /// would otherwise never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed_this_frame.clear();
    }

    /// End-of-frame reset of per-frame data.
    pub fn clear_transients(&mut self) {
        self.pressed_this_frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_held_initially() {
        let kb = KeyboardState::new();
        for code in [KeyCode::KeyW, KeyCode::KeyE, KeyCode::Escape] {
            assert!(!kb.is_held(code));
            assert!(!kb.pressed_this_frame(code));
        }
    }

    #[test]
    fn test_press_then_release() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyW));
        assert!(kb.is_held(KeyCode::KeyW));
        kb.clear_transients();
        assert!(kb.is_held(KeyCode::KeyW));
        assert!(!kb.pressed_this_frame(KeyCode::KeyW));

        kb.process_raw(RawKeyEvent::release(KeyCode::KeyW));
        assert!(!kb.is_held(KeyCode::KeyW));
    }

    #[test]
    fn test_tap_within_one_frame_is_seen() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyE));
        kb.process_raw(RawKeyEvent::release(KeyCode::KeyE));
        assert!(kb.is_held(KeyCode::KeyE));
        kb.clear_transients();
        assert!(!kb.is_held(KeyCode::KeyE));
    }

    #[test]
    fn test_repeat_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyA));
        kb.clear_transients();
        kb.process_raw(RawKeyEvent {
            repeat: true,
            ..RawKeyEvent::press(KeyCode::KeyA)
        });
        assert!(!kb.pressed_this_frame(KeyCode::KeyA));
    }

    #[test]
    fn test_release_all() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyS));
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyD));
        kb.release_all();
        assert!(!kb.is_held(KeyCode::KeyS));
        assert!(!kb.is_held(KeyCode::KeyD));
    }
}
