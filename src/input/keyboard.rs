use serde::{Deserialize, Serialize};

/// Directional actions the orbit controller reacts to.
///
/// Actions pair up into three axes (vertical, horizontal, zoom). Within an
/// axis at most one action takes effect per frame.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// move_up = "KeyW"
/// zoom_out = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitAction {
    /// Increase latitude.
    MoveUp,
    /// Decrease latitude.
    MoveDown,
    /// Shift longitude by the left polarity.
    MoveLeft,
    /// Shift longitude opposite to the left polarity.
    MoveRight,
    /// Grow the orbit radius toward the maximum.
    ZoomIn,
    /// Shrink the orbit radius toward the minimum.
    ZoomOut,
}

impl OrbitAction {
    /// Every action, in per-axis priority order.
    pub const ALL: [Self; 6] = [
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::ZoomIn,
        Self::ZoomOut,
    ];
}
