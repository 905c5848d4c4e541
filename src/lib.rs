// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Spherical coordinates and a keyboard-driven orbit camera for globe
//! viewers.
//!
//! The crate holds the engine-independent part of a globe demo: converting
//! longitude/latitude/radius triples to Cartesian offsets and back, and an
//! orbit controller that turns per-frame key input into a camera eye
//! position and up vector. Rendering, windowing, and picking stay with the
//! host engine.
//!
//! # Key entry points
//!
//! - [`polar::Polar`] - spherical coordinate value type and conversions
//! - [`camera::OrbitController`] - per-frame orbit updates and camera pose
//! - [`input::OrbitInput`] - held-action snapshot fed to the controller
//! - [`options::Options`] - speeds, zoom range, polarity and key bindings
//!   with TOML presets
//!
//! # Frame flow
//!
//! The host keeps one [`camera::OrbitController`] for the session. Each
//! frame it measures the elapsed time (see [`util::frame_timing`]), updates
//! the [`input::OrbitInput`] from key events, calls
//! [`camera::OrbitController::update`], and copies
//! [`camera::OrbitController::pose`] onto its camera.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod polar;
pub mod util;

pub use error::GlobeError;
