//! Crate-level error types.

use std::fmt;

/// Errors produced by the globe-orbit crate.
///
/// The coordinate math never fails; an inconsistent radius shows up as
/// NaN in the result instead. Only configuration and input scripts go
/// through this type.
#[derive(Debug)]
pub enum GlobeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold values the controller cannot use.
    InvalidOptions(String),
    /// Malformed input script.
    Script(String),
}

impl fmt::Display for GlobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::Script(msg) => write!(f, "input script error: {msg}"),
        }
    }
}

impl std::error::Error for GlobeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlobeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
