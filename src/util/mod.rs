//! Shared utilities for host loops.

/// Frame pacing and clamped frame deltas.
pub mod frame_timing;
