//! Per-frame snapshot of which orbit actions are held.

use super::keyboard::OrbitAction;
use crate::options::KeybindingOptions;

/// Which [`OrbitAction`]s are active this frame.
///
/// The host keeps one of these alive, flips flags as key events arrive,
/// and hands it to
/// [`OrbitController::update`](crate::camera::controller::OrbitController::update)
/// once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OrbitInput {
    move_up: bool,
    move_down: bool,
    move_left: bool,
    move_right: bool,
    zoom_in: bool,
    zoom_out: bool,
}

impl OrbitInput {
    /// Snapshot with the given actions held.
    #[must_use]
    pub fn from_actions(actions: impl IntoIterator<Item = OrbitAction>) -> Self {
        let mut input = Self::default();
        for action in actions {
            input.press(action);
        }
        input
    }

    /// Set the held state of one action.
    pub fn set(&mut self, action: OrbitAction, active: bool) {
        *self.flag_mut(action) = active;
    }

    /// Mark an action as held.
    pub fn press(&mut self, action: OrbitAction) {
        self.set(action, true);
    }

    /// Mark an action as released.
    pub fn release(&mut self, action: OrbitAction) {
        self.set(action, false);
    }

    /// Release everything (e.g. on focus loss).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether an action is held.
    #[must_use]
    pub fn is_active(&self, action: OrbitAction) -> bool {
        match action {
            OrbitAction::MoveUp => self.move_up,
            OrbitAction::MoveDown => self.move_down,
            OrbitAction::MoveLeft => self.move_left,
            OrbitAction::MoveRight => self.move_right,
            OrbitAction::ZoomIn => self.zoom_in,
            OrbitAction::ZoomOut => self.zoom_out,
        }
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        OrbitAction::ALL.iter().all(|a| !self.is_active(*a))
    }

    /// Apply a raw key event through the bindings.
    ///
    /// Returns `true` when the key is bound to an orbit action (and the
    /// event was consumed).
    pub fn handle_key(
        &mut self,
        bindings: &KeybindingOptions,
        key: &str,
        pressed: bool,
    ) -> bool {
        match bindings.lookup(key) {
            Some(action) => {
                self.set(action, pressed);
                true
            }
            None => false,
        }
    }

    fn flag_mut(&mut self, action: OrbitAction) -> &mut bool {
        match action {
            OrbitAction::MoveUp => &mut self.move_up,
            OrbitAction::MoveDown => &mut self.move_down,
            OrbitAction::MoveLeft => &mut self.move_left,
            OrbitAction::MoveRight => &mut self.move_right,
            OrbitAction::ZoomIn => &mut self.zoom_in,
            OrbitAction::ZoomOut => &mut self.zoom_out,
        }
    }
}
