//! Longitude/latitude/radius coordinates and their Cartesian conversions.
//!
//! Longitude is measured in the XZ plane from +X toward +Z; latitude is the
//! elevation toward +Y. All angles are in degrees. Conversions are relative
//! to an implicit center unless a `center` argument is taken.
//!
//! Center-relative offsets are `DVec3`: near the poles `asin` magnifies any
//! rounding of `y`, and f32 storage alone costs ~0.02 degrees there. Absolute
//! engine-facing positions are `Vec3`.

use glam::{DVec3, Vec3};

/// One full turn, in degrees.
pub const FULL_TURN: f32 = 360.0;

/// Bring an angle into `[0, 360)` with a single +/-360 correction.
///
/// This is not a full modulo: inputs in `(-360, 720)` land in range, anything
/// further out stays out of range. Per-frame orbit deltas are far below one
/// turn, so one step is enough.
#[must_use]
pub fn wrap_degrees(angle: f32) -> f32 {
    let mut wrapped = angle;
    if wrapped < 0.0 {
        wrapped += FULL_TURN;
    }
    // A tiny negative angle can round up to exactly 360 above.
    if wrapped >= FULL_TURN {
        wrapped -= FULL_TURN;
    }
    wrapped
}

/// A point on (or off) a sphere: longitude and latitude in degrees plus a
/// radial distance from the center.
///
/// Angles are stored exactly as given. Nothing here normalizes or validates
/// them; callers doing angle arithmetic wrap afterwards with
/// [`wrap_degrees`] or [`Polar::wrapped`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Angle around the Y axis in degrees, from +X toward +Z.
    pub longitude: f32,
    /// Elevation above the XZ plane in degrees. `[-90, 90]` for a point on
    /// the sphere, though values outside that band are accepted.
    pub latitude: f32,
    /// Distance from the center. Must be positive for the reverse
    /// conversion to be defined.
    pub radius: f32,
}

impl Default for Polar {
    fn default() -> Self {
        Self::with_radius(0.0, 0.0, 1.0)
    }
}

impl Polar {
    /// Point on the unit sphere.
    #[must_use]
    pub const fn new(longitude: f32, latitude: f32) -> Self {
        Self::with_radius(longitude, latitude, 1.0)
    }

    /// Point at the given distance from the center.
    #[must_use]
    pub const fn with_radius(longitude: f32, latitude: f32, radius: f32) -> Self {
        Self {
            longitude,
            latitude,
            radius,
        }
    }

    /// Recover longitude and latitude from a center-relative vector whose
    /// length the caller already knows.
    ///
    /// `radius` is trusted, not measured: the result is only faithful when
    /// `offset.length() == radius`. When `|offset.y / radius| > 1` the
    /// latitude comes out NaN rather than being clamped, so an inconsistent
    /// caller is visible downstream. Longitude is wrapped into `[0, 360)`
    /// and is arbitrary (0) on the polar axis.
    #[must_use]
    pub fn from_cartesian(offset: DVec3, radius: f32) -> Self {
        let latitude = (offset.y / f64::from(radius)).asin().to_degrees();
        let longitude = offset.z.atan2(offset.x).to_degrees();

        Self {
            longitude: wrap_degrees(longitude as f32),
            latitude: latitude as f32,
            radius,
        }
    }

    /// [`Polar::from_cartesian`] for an absolute `point` around `center`.
    #[must_use]
    pub fn from_offset(center: Vec3, point: Vec3, radius: f32) -> Self {
        Self::from_cartesian(point.as_dvec3() - center.as_dvec3(), radius)
    }

    /// Reverse conversion that measures the radius from the point itself.
    ///
    /// Use this for points that come from outside (ray picks, tracked
    /// nodes) where no trusted radius exists. A point sitting exactly on
    /// the center yields NaN angles.
    #[must_use]
    pub fn from_surface_point(center: Vec3, point: Vec3) -> Self {
        let offset = point.as_dvec3() - center.as_dvec3();
        Self::from_cartesian(offset, offset.length() as f32)
    }

    /// Center-relative Cartesian offset of this point.
    ///
    /// A `to_cartesian`/`from_cartesian` round trip with the same radius
    /// recovers latitude within 1e-4 degrees over all of `[-90, 90]`.
    #[must_use]
    pub fn to_cartesian(&self) -> DVec3 {
        let (sin_lon, cos_lon) = f64::from(self.longitude).to_radians().sin_cos();
        let (sin_lat, cos_lat) = f64::from(self.latitude).to_radians().sin_cos();
        let r = f64::from(self.radius);

        DVec3::new(r * cos_lat * cos_lon, r * sin_lat, r * cos_lat * sin_lon)
    }

    /// Absolute position of this point around `center`, rounded to f32 once.
    #[must_use]
    pub fn offset_from(&self, center: Vec3) -> Vec3 {
        (center.as_dvec3() + self.to_cartesian()).as_vec3()
    }

    /// Copy with longitude and latitude passed through [`wrap_degrees`].
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self {
            longitude: wrap_degrees(self.longitude),
            latitude: wrap_degrees(self.latitude),
            radius: self.radius,
        }
    }
}
