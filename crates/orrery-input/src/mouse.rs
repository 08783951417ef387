//! Frame-coherent mouse tracker: look delta and scroll.

use glam::Vec2;
use winit::event::MouseScrollDelta;
use winit::window::{CursorGrabMode, Window};

/// Pixels of trackpad scroll treated as one wheel notch.
const PIXELS_PER_LINE: f64 = 40.0;

/// Accumulates pointer motion and wheel input between frame samples.
///
/// While the cursor is grabbed, look deltas come from raw device motion;
/// otherwise they come from successive cursor positions. The first cursor
/// position after a grab change only establishes a reference point, so the
/// view does not jump.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    last_position: Option<Vec2>,
    delta: Vec2,
    scroll: f32,
    grabbed: bool,
}

impl MouseState {
    /// Empty tracker, cursor free.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `WindowEvent::CursorMoved`.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let position = Vec2::new(x as f32, y as f32);
        if !self.grabbed
            && let Some(last) = self.last_position
        {
            self.delta += position - last;
        }
        self.last_position = Some(position);
    }

    /// `DeviceEvent::MouseMotion`. Only counted while grabbed.
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        if self.grabbed {
            self.delta += Vec2::new(dx as f32, dy as f32);
        }
    }

    /// `WindowEvent::MouseWheel`. Positive is away from the user.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
        };
    }

    /// Grab or release the cursor on `window`.
    ///
    /// Tries a hard lock first and falls back to confinement on platforms
    /// that cannot lock.
    pub fn set_grabbed(&mut self, window: &Window, grabbed: bool) {
        self.set_grabbed_flag(grabbed);
        if grabbed {
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err()
                && let Err(err) = window.set_cursor_grab(CursorGrabMode::Confined)
            {
                tracing::warn!(%err, "cursor grab unavailable");
            }
            window.set_cursor_visible(false);
        } else {
            if let Err(err) = window.set_cursor_grab(CursorGrabMode::None) {
                tracing::warn!(%err, "failed to release cursor");
            }
            window.set_cursor_visible(true);
        }
    }

    /// Update the grab flag without touching a window.
    pub fn set_grabbed_flag(&mut self, grabbed: bool) {
        self.grabbed = grabbed;
        self.last_position = None;
    }

    /// Whether the cursor is grabbed.
    #[must_use]
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Pointer motion since the last clear, in pixels, y pointing down.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Wheel notches since the last clear.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Reset motion and scroll. Call after each frame sample.
    pub fn clear_transients(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll = 0.0;
    }
}
