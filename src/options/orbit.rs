use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest accepted orbit radius.
///
/// The up vector is measured from a reference point at `2 * r^2`; below
/// this the reference point falls inside the orbit and the up vector swings
/// toward the view direction.
pub const MIN_ORBIT_RADIUS: f32 = 0.5;

/// Which way the "left" action turns the camera around the globe.
///
/// Both conventions show up in practice depending on whether the user
/// thinks of moving the camera or spinning the globe, so it is a setting
/// rather than a constant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalPolarity {
    /// Left decreases longitude, right increases it.
    #[default]
    LeftDecreases,
    /// Left increases longitude, right decreases it.
    LeftIncreases,
}

impl HorizontalPolarity {
    /// Sign applied to the longitude delta of the "left" action.
    #[must_use]
    pub fn left_sign(self) -> f32 {
        match self {
            Self::LeftDecreases => -1.0,
            Self::LeftIncreases => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit camera speeds, zoom range and starting position.
pub struct OrbitOptions {
    /// Angular speed of the move actions, in degrees per second.
    #[schemars(title = "Move Speed", range(min = 1.0, max = 360.0), extend("step" = 1.0))]
    pub move_speed: f32,
    /// Radial speed of the zoom actions, in units per second.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Closest allowed orbit radius.
    #[schemars(title = "Min Radius", range(min = 0.5))]
    pub min_radius: f32,
    /// Farthest allowed orbit radius.
    #[schemars(title = "Max Radius", range(min = 0.5))]
    pub max_radius: f32,
    /// Starting longitude in degrees.
    #[schemars(skip)]
    pub initial_longitude: f32,
    /// Starting latitude in degrees.
    #[schemars(skip)]
    pub initial_latitude: f32,
    /// Starting radius, clamped into the zoom range.
    #[schemars(skip)]
    pub initial_radius: f32,
    /// Direction the "left" action turns the camera.
    #[schemars(title = "Horizontal Polarity")]
    pub horizontal_polarity: HorizontalPolarity,
    /// Radius of the sphere that diagnostics project onto (the globe's
    /// own radius).
    #[schemars(skip)]
    pub probe_radius: f32,
    /// Upper bound on a single frame's delta time, in seconds.
    #[schemars(skip)]
    pub max_frame_delta: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            move_speed: 60.0,
            zoom_speed: 3.0,
            min_radius: 6.0,
            max_radius: 12.0,
            initial_longitude: 180.0,
            initial_latitude: 180.0,
            initial_radius: 12.0,
            horizontal_polarity: HorizontalPolarity::LeftDecreases,
            probe_radius: 5.0,
            max_frame_delta: 0.25,
        }
    }
}

impl OrbitOptions {
    /// Check the values the controller relies on. Returns a description of
    /// the first problem found.
    pub(crate) fn check(&self) -> Result<(), String> {
        let speeds = [("move_speed", self.move_speed), ("zoom_speed", self.zoom_speed)];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        let positive = [
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("probe_radius", self.probe_radius),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be finite and > 0, got {value}"));
            }
        }
        if self.min_radius < MIN_ORBIT_RADIUS {
            return Err(format!(
                "min_radius must be >= {MIN_ORBIT_RADIUS}, got {}",
                self.min_radius
            ));
        }
        if self.min_radius > self.max_radius {
            return Err(format!(
                "min_radius ({}) exceeds max_radius ({})",
                self.min_radius, self.max_radius
            ));
        }
        Ok(())
    }
}
