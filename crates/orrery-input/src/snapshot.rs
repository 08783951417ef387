//! What the simulation sees of the user each frame, and edge detection
//! across consecutive frames.

use glam::Vec2;

use crate::action_map::{Action, InputMap};
use crate::keyboard::KeyboardState;
use crate::mouse::MouseState;

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Forward held.
    pub move_forward: bool,
    /// Backward held.
    pub move_back: bool,
    /// Strafe left held.
    pub move_left: bool,
    /// Strafe right held.
    pub move_right: bool,
    /// Next-body held.
    pub next_body: bool,
    /// Previous-body held.
    pub previous_body: bool,
    /// Exit held.
    pub exit: bool,
    /// Pointer motion in pixels, y down.
    pub mouse_delta: Vec2,
    /// Wheel notches, positive away from the user.
    pub scroll: f32,
}

impl InputSnapshot {
    /// Read the trackers through `map`. Call before clearing their transients.
    #[must_use]
    pub fn sample(map: &InputMap, keyboard: &KeyboardState, mouse: &MouseState) -> Self {
        let mut snapshot = Self {
            mouse_delta: mouse.delta(),
            scroll: mouse.scroll(),
            ..Self::default()
        };
        for action in Action::ALL {
            snapshot.set(action, map.is_active(action, keyboard));
        }
        if map.invert_y {
            snapshot.mouse_delta.y = -snapshot.mouse_delta.y;
        }
        snapshot
    }

    /// Whether `action` is held in this snapshot.
    #[must_use]
    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveForward => self.move_forward,
            Action::MoveBack => self.move_back,
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::NextBody => self.next_body,
            Action::PreviousBody => self.previous_body,
            Action::Exit => self.exit,
        }
    }

    /// Set whether `action` is held.
    pub fn set(&mut self, action: Action, held: bool) {
        let slot = match action {
            Action::MoveForward => &mut self.move_forward,
            Action::MoveBack => &mut self.move_back,
            Action::MoveLeft => &mut self.move_left,
            Action::MoveRight => &mut self.move_right,
            Action::NextBody => &mut self.next_body,
            Action::PreviousBody => &mut self.previous_body,
            Action::Exit => &mut self.exit,
        };
        *slot = held;
    }

    /// Builder form of [`set`](Self::set) for scripted input.
    #[must_use]
    pub fn with(mut self, action: Action, held: bool) -> Self {
        self.set(action, held);
        self
    }

    /// Whether any flight direction is held.
    #[must_use]
    pub fn any_movement(&self) -> bool {
        self.move_forward || self.move_back || self.move_left || self.move_right
    }
}

/// Previous and current snapshots, for press edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionState {
    previous: InputSnapshot,
    current: InputSnapshot,
}

impl ActionState {
    /// Nothing held on either side.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the current snapshot to previous and install `snapshot`.
    pub fn advance(&mut self, snapshot: InputSnapshot) {
        self.previous = self.current;
        self.current = snapshot;
    }

    /// The latest snapshot.
    #[must_use]
    pub fn current(&self) -> &InputSnapshot {
        &self.current
    }

    /// Whether `action` is held now.
    #[must_use]
    pub fn is_pressed(&self, action: Action) -> bool {
        self.current.is_pressed(action)
    }

    /// Released last frame, held this frame.
    #[must_use]
    pub fn just_pressed(&self, action: Action) -> bool {
        self.current.is_pressed(action) && !self.previous.is_pressed(action)
    }

    /// No direction held last frame, some direction held this frame.
    #[must_use]
    pub fn movement_just_started(&self) -> bool {
        self.current.any_movement() && !self.previous.any_movement()
    }
}
