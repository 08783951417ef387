//! Named actions and their key bindings.
//!
//! [`InputMap`] is plain data that round-trips through RON, so users can
//! rebind keys by editing `keybindings.ron` next to the main config.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// Serde for [`KeyCode`], which has no serde support of its own. Keys are
/// written by their W3C code name (`"KeyW"`, `"Escape"`).
mod keycode_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use winit::keyboard::KeyCode;

    const NAMES: &[(&str, KeyCode)] = &[
        ("KeyA", KeyCode::KeyA),
        ("KeyB", KeyCode::KeyB),
        ("KeyC", KeyCode::KeyC),
        ("KeyD", KeyCode::KeyD),
        ("KeyE", KeyCode::KeyE),
        ("KeyF", KeyCode::KeyF),
        ("KeyG", KeyCode::KeyG),
        ("KeyH", KeyCode::KeyH),
        ("KeyI", KeyCode::KeyI),
        ("KeyJ", KeyCode::KeyJ),
        ("KeyK", KeyCode::KeyK),
        ("KeyL", KeyCode::KeyL),
        ("KeyM", KeyCode::KeyM),
        ("KeyN", KeyCode::KeyN),
        ("KeyO", KeyCode::KeyO),
        ("KeyP", KeyCode::KeyP),
        ("KeyQ", KeyCode::KeyQ),
        ("KeyR", KeyCode::KeyR),
        ("KeyS", KeyCode::KeyS),
        ("KeyT", KeyCode::KeyT),
        ("KeyU", KeyCode::KeyU),
        ("KeyV", KeyCode::KeyV),
        ("KeyW", KeyCode::KeyW),
        ("KeyX", KeyCode::KeyX),
        ("KeyY", KeyCode::KeyY),
        ("KeyZ", KeyCode::KeyZ),
        ("Space", KeyCode::Space),
        ("Enter", KeyCode::Enter),
        ("Escape", KeyCode::Escape),
        ("Tab", KeyCode::Tab),
        ("ShiftLeft", KeyCode::ShiftLeft),
        ("ControlLeft", KeyCode::ControlLeft),
        ("ArrowUp", KeyCode::ArrowUp),
        ("ArrowDown", KeyCode::ArrowDown),
        ("ArrowLeft", KeyCode::ArrowLeft),
        ("ArrowRight", KeyCode::ArrowRight),
        ("PageUp", KeyCode::PageUp),
        ("PageDown", KeyCode::PageDown),
    ];

    fn name_of(code: KeyCode) -> Option<&'static str> {
        NAMES.iter().find(|(_, c)| *c == code).map(|(n, _)| *n)
    }

    fn code_of(name: &str) -> Option<KeyCode> {
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }

    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        match name_of(*code) {
            Some(name) => s.serialize_str(name),
            None => Err(serde::ser::Error::custom(format!("unbindable key: {code:?}"))),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        code_of(&name).ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }
}

/// Everything the user can ask the simulation to do.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Fly forward (free camera).
    MoveForward,
    /// Fly backward.
    MoveBack,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Follow the next body.
    NextBody,
    /// Follow the previous body.
    PreviousBody,
    /// Quit.
    Exit,
}

impl Action {
    /// Every action.
    pub const ALL: [Action; 7] = [
        Action::MoveForward,
        Action::MoveBack,
        Action::MoveLeft,
        Action::MoveRight,
        Action::NextBody,
        Action::PreviousBody,
        Action::Exit,
    ];

    /// Whether this is one of the four flight directions.
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            Action::MoveForward | Action::MoveBack | Action::MoveLeft | Action::MoveRight
        )
    }
}

/// One physical key bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBinding(#[serde(with = "keycode_serde")] pub KeyCode);

/// Action → keys table, plus the look-axis preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputMap {
    /// Keys per action. Any bound key activates the action.
    pub bindings: HashMap<Action, Vec<KeyBinding>>,
    /// Flip vertical mouse look.
    pub invert_y: bool,
}

impl Default for InputMap {
    /// W/S/A/D to fly, E and Q to cycle bodies, Escape to quit.
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(Action::MoveForward, vec![KeyBinding(KeyCode::KeyW)]);
        bindings.insert(Action::MoveBack, vec![KeyBinding(KeyCode::KeyS)]);
        bindings.insert(Action::MoveLeft, vec![KeyBinding(KeyCode::KeyA)]);
        bindings.insert(Action::MoveRight, vec![KeyBinding(KeyCode::KeyD)]);
        bindings.insert(Action::NextBody, vec![KeyBinding(KeyCode::KeyE)]);
        bindings.insert(Action::PreviousBody, vec![KeyBinding(KeyCode::KeyQ)]);
        bindings.insert(Action::Exit, vec![KeyBinding(KeyCode::Escape)]);
        Self {
            bindings,
            invert_y: false,
        }
    }
}

impl InputMap {
    /// Replace the keys bound to `action`.
    pub fn bind(&mut self, action: Action, keys: &[KeyCode]) {
        self.bindings
            .insert(action, keys.iter().copied().map(KeyBinding).collect());
    }

    /// Keys bound to `action`.
    #[must_use]
    pub fn keys_for(&self, action: Action) -> &[KeyBinding] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }

    /// Whether any key bound to `action` is held.
    #[must_use]
    pub fn is_active(&self, action: Action, keyboard: &KeyboardState) -> bool {
        self.keys_for(action)
            .iter()
            .any(|KeyBinding(code)| keyboard.is_held(*code))
    }

    /// Pretty RON text.
    ///
    /// # Errors
    /// Fails if a bound key has no RON name.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Parse RON text.
    ///
    /// # Errors
    /// Fails on malformed RON or unknown key names.
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Read bindings from `path`, falling back to the defaults when the
    /// file is missing or unreadable. A bad file is logged, not fatal.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match Self::from_ron(&text) {
            Ok(map) => {
                info!(path = %path.display(), "loaded key bindings");
                map
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "invalid key bindings, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;

    #[test]
    fn test_default_binds_every_action() {
        let map = InputMap::default();
        for action in Action::ALL {
            assert!(!map.keys_for(action).is_empty(), "{action:?} unbound");
        }
    }

    #[test]
    fn test_is_active_reads_keyboard() {
        let map = InputMap::default();
        let mut kb = KeyboardState::new();
        assert!(!map.is_active(Action::NextBody, &kb));
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyE));
        assert!(map.is_active(Action::NextBody, &kb));
        assert!(!map.is_active(Action::PreviousBody, &kb));
    }

    #[test]
    fn test_multiple_keys_per_action() {
        let mut map = InputMap::default();
        map.bind(Action::MoveForward, &[KeyCode::KeyW, KeyCode::ArrowUp]);
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::ArrowUp));
        assert!(map.is_active(Action::MoveForward, &kb));
    }

    #[test]
    fn test_ron_round_trip() {
        let mut map = InputMap::default();
        map.invert_y = true;
        map.bind(Action::Exit, &[KeyCode::Escape, KeyCode::KeyX]);
        let text = map.to_ron().unwrap();
        assert!(text.contains("\"Escape\""));
        assert_eq!(InputMap::from_ron(&text).unwrap(), map);
    }

    #[test]
    fn test_unknown_key_name_rejected() {
        let text = r#"(bindings: { Exit: ["NotAKey"] })"#;
        assert!(InputMap::from_ron(text).is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let map = InputMap::from_ron("(invert_y: true)").unwrap();
        assert!(map.invert_y);
        assert_eq!(map.keys_for(Action::NextBody), &[KeyBinding(KeyCode::KeyE)]);
    }

    #[test]
    fn test_load_or_default_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keybindings.ron");
        assert_eq!(InputMap::load_or_default(&path), InputMap::default());

        fs::write(&path, "not ron at all").unwrap();
        assert_eq!(InputMap::load_or_default(&path), InputMap::default());

        fs::write(&path, "(invert_y: true)").unwrap();
        assert!(InputMap::load_or_default(&path).invert_y);
    }
}
