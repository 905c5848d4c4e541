use serde::{Deserialize, Serialize};

use crate::input::OrbitAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings, one key string per orbit action.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ArrowUp"`, `"Space"`, etc.
pub struct KeybindingOptions {
    /// Key that raises latitude.
    pub move_up: String,
    /// Key that lowers latitude.
    pub move_down: String,
    /// Key for the "left" longitude action.
    pub move_left: String,
    /// Key for the "right" longitude action.
    pub move_right: String,
    /// Key that grows the orbit radius.
    pub zoom_in: String,
    /// Key that shrinks the orbit radius.
    pub zoom_out: String,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            move_up: "KeyW".into(),
            move_down: "KeyS".into(),
            move_left: "KeyA".into(),
            move_right: "KeyD".into(),
            zoom_in: "KeyE".into(),
            zoom_out: "KeyQ".into(),
        }
    }
}

impl KeybindingOptions {
    /// Key string bound to an action.
    #[must_use]
    pub fn key_for(&self, action: OrbitAction) -> &str {
        match action {
            OrbitAction::MoveUp => &self.move_up,
            OrbitAction::MoveDown => &self.move_down,
            OrbitAction::MoveLeft => &self.move_left,
            OrbitAction::MoveRight => &self.move_right,
            OrbitAction::ZoomIn => &self.zoom_in,
            OrbitAction::ZoomOut => &self.zoom_out,
        }
    }

    /// Look up the action for a key string. If a key is bound twice the
    /// first action in [`OrbitAction::ALL`] order wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<OrbitAction> {
        OrbitAction::ALL
            .into_iter()
            .find(|action| self.key_for(*action) == key)
    }
}
