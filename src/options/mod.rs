//! Orbit camera options with TOML preset support.
//!
//! Speeds, zoom range, starting position, polarity and key bindings live
//! here. Options serialize to/from TOML so a session can be started from a
//! saved preset.

mod keybindings;
mod orbit;

use std::path::Path;

pub use keybindings::KeybindingOptions;
pub use orbit::{HorizontalPolarity, OrbitOptions, MIN_ORBIT_RADIUS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GlobeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit speeds, zoom range and starting position.
    pub orbit: OrbitOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml(content: &str) -> Result<Self, GlobeError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlobeError> {
        let content = std::fs::read_to_string(path).map_err(GlobeError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded orbit options from {}", path.display());
        Ok(options)
    }

    /// Validate and write options as a TOML preset, creating the preset
    /// directory when missing. Invalid options are never written.
    pub fn save(&self, path: &Path) -> Result<(), GlobeError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))?;
        if let Some(dir) =
            path.parent().filter(|dir| !dir.as_os_str().is_empty())
        {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved orbit options to {}", path.display());
        Ok(())
    }

    /// Reject values the orbit controller cannot work with.
    pub fn validate(&self) -> Result<(), GlobeError> {
        self.orbit.check().map_err(GlobeError::InvalidOptions)
    }

    /// Names of the orbit presets (TOML file stems) in `dir`, sorted. A
    /// missing or unreadable directory has no presets.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            log::debug!("No preset directory at {}", dir.display());
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect();
        names.sort_unstable();
        names
    }
}
