//! Timed key-hold sequences for driving the controller without a window.
//!
//! A script is a comma-separated list of `KEYS:SECONDS` steps. `KEYS` is one
//! or more bound key names joined by `+`, or `-` for a pause:
//!
//! ```text
//! KeyW:1.5,KeyD+KeyE:2,-:0.5
//! ```

use super::state::OrbitInput;
use crate::error::GlobeError;
use crate::options::KeybindingOptions;

/// One step of a script: the input held and for how long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    /// Actions held during the step.
    pub input: OrbitInput,
    /// How long the step lasts, in seconds.
    pub seconds: f32,
}

/// Parsed sequence of [`ScriptStep`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
}

impl InputScript {
    /// Parse a script, resolving key names through `bindings`.
    pub fn parse(
        text: &str,
        bindings: &KeybindingOptions,
    ) -> Result<Self, GlobeError> {
        let steps = text
            .split(',')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(|step| parse_step(step, bindings))
            .collect::<Result<Vec<_>, _>>()?;

        if steps.is_empty() {
            return Err(GlobeError::Script("script has no steps".to_owned()));
        }
        Ok(Self { steps })
    }

    /// Steps in playback order.
    #[must_use]
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Sum of all step durations, in seconds.
    #[must_use]
    pub fn total_seconds(&self) -> f32 {
        self.steps.iter().map(|s| s.seconds).sum()
    }
}

fn parse_step(
    step: &str,
    bindings: &KeybindingOptions,
) -> Result<ScriptStep, GlobeError> {
    let (keys, seconds) = step.rsplit_once(':').ok_or_else(|| {
        GlobeError::Script(format!("step '{step}' is missing ':SECONDS'"))
    })?;

    let seconds: f32 = seconds.trim().parse().map_err(|_| {
        GlobeError::Script(format!("step '{step}' has a bad duration"))
    })?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(GlobeError::Script(format!(
            "step '{step}' has a negative or non-finite duration"
        )));
    }

    let mut input = OrbitInput::default();
    let keys = keys.trim();
    if keys != "-" {
        for key in keys.split('+').map(str::trim) {
            let action = bindings.lookup(key).ok_or_else(|| {
                GlobeError::Script(format!("unknown key '{key}'"))
            })?;
            input.press(action);
        }
    }

    Ok(ScriptStep { input, seconds })
}
