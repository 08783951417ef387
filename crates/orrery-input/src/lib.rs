//! Keyboard and mouse tracking, key bindings, and the per-frame input
//! snapshot the simulation consumes.

pub mod action_map;
pub mod keyboard;
pub mod mouse;
pub mod snapshot;

pub use action_map::{Action, InputMap, KeyBinding};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::MouseState;
pub use snapshot::{ActionState, InputSnapshot};
