//! Input handling: orbit actions, the per-frame input snapshot, and
//! scripted input for headless hosts.

/// Bindable orbit actions.
pub mod keyboard;
/// Timed key-hold scripts.
pub mod script;
/// Per-frame held-action snapshot.
pub mod state;

pub use keyboard::OrbitAction;
pub use script::{InputScript, ScriptStep};
pub use state::OrbitInput;
