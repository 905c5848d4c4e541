//! Camera system for orbiting a globe.
//!
//! Provides a keyboard-driven orbit controller built on [`Polar`]
//! coordinates and the camera pose it produces each frame.
//!
//! [`Polar`]: crate::polar::Polar

/// Orbit controller: input-driven angle/zoom updates, eye and up vector.
pub mod controller;
/// Camera pose handed to the host.
pub mod core;

pub use controller::{OrbitController, OrbitDiagnostics};
pub use self::core::CameraPose;
