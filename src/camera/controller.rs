use std::fmt;

use glam::Vec3;

use super::core::CameraPose;
use crate::input::{OrbitAction, OrbitInput};
use crate::options::{HorizontalPolarity, OrbitOptions};
use crate::polar::Polar;

/// Latitude offset (degrees) of the reference point the up vector is
/// measured from.
const UP_REFERENCE_LATITUDE_OFFSET: f32 = 45.0;

/// Orbit camera driven by directional key input.
///
/// Owns the camera's [`Polar`] location around a fixed center. The host
/// calls [`update`](Self::update) once per frame with the elapsed time and
/// the held actions, then reads back [`pose`](Self::pose).
///
/// Longitude and latitude are kept in `[0, 360)` with a single-step wrap.
/// Latitude is not clamped to `[-90, 90]`: holding "up" carries the camera
/// over the pole and down the far side, and the up vector follows without
/// flipping. The up vector needs a radius of at least
/// [`MIN_ORBIT_RADIUS`](crate::options::MIN_ORBIT_RADIUS), which
/// [`Options::validate`](crate::options::Options::validate) enforces.
#[derive(Debug, Clone)]
pub struct OrbitController {
    location: Polar,
    center: Vec3,
    min_radius: f32,
    max_radius: f32,
    move_speed: f32,
    zoom_speed: f32,
    polarity: HorizontalPolarity,
    probe_radius: f32,
    /// Distance of the up-vector reference point, `radius^2 * 2`.
    up_vector_distance: f32,
}

impl OrbitController {
    /// Controller at the configured starting location around `center`.
    #[must_use]
    pub fn new(options: &OrbitOptions, center: Vec3) -> Self {
        let mut controller = Self {
            location: Polar::default(),
            center,
            min_radius: options.min_radius,
            max_radius: options.max_radius,
            move_speed: options.move_speed,
            zoom_speed: options.zoom_speed,
            polarity: options.horizontal_polarity,
            probe_radius: options.probe_radius,
            up_vector_distance: 0.0,
        };
        controller.set_location(Polar::with_radius(
            options.initial_longitude,
            options.initial_latitude,
            options.initial_radius,
        ));
        controller
    }

    /// Re-read speeds, zoom range and polarity. The current location is
    /// kept, with its radius clamped into the new range.
    pub fn apply_options(&mut self, options: &OrbitOptions) {
        self.min_radius = options.min_radius;
        self.max_radius = options.max_radius;
        self.move_speed = options.move_speed;
        self.zoom_speed = options.zoom_speed;
        self.polarity = options.horizontal_polarity;
        self.probe_radius = options.probe_radius;
        self.set_radius(self.location.radius);
        log::debug!(
            "orbit options applied: radius range [{}, {}], polarity {:?}",
            self.min_radius,
            self.max_radius,
            self.polarity
        );
    }

    /// Advance the orbit by `dt` seconds of held input.
    ///
    /// Each axis is independent; within an axis the first action wins
    /// (up over down, left over right, zoom-in over zoom-out).
    pub fn update(&mut self, dt: f32, input: &OrbitInput) {
        let step = self.move_speed * dt;

        if input.is_active(OrbitAction::MoveUp) {
            self.location.latitude += step;
        } else if input.is_active(OrbitAction::MoveDown) {
            self.location.latitude -= step;
        }

        let left = self.polarity.left_sign();
        if input.is_active(OrbitAction::MoveLeft) {
            self.location.longitude += left * step;
        } else if input.is_active(OrbitAction::MoveRight) {
            self.location.longitude -= left * step;
        }

        let zoom = self.zoom_speed * dt;
        if input.is_active(OrbitAction::ZoomIn) {
            self.set_radius(self.location.radius + zoom);
        } else if input.is_active(OrbitAction::ZoomOut) {
            self.set_radius(self.location.radius - zoom);
        }

        self.location = self.location.wrapped();

        log::trace!(
            "orbit update dt={dt:.4}: lon={:.3} lat={:.3} r={:.3}",
            self.location.longitude,
            self.location.latitude,
            self.location.radius
        );
    }

    /// Jump to a location. Angles are wrapped and the radius clamped.
    pub fn set_location(&mut self, location: Polar) {
        self.location = location.wrapped();
        self.set_radius(location.radius);
    }

    /// Move the orbited center (e.g. to follow a tracked node).
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    /// Current orbit location.
    #[must_use]
    pub fn location(&self) -> Polar {
        self.location
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Allowed radius range as `(min, max)`.
    #[must_use]
    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_radius, self.max_radius)
    }

    /// Distance of the up-vector reference point from the center.
    #[must_use]
    pub fn up_vector_distance(&self) -> f32 {
        self.up_vector_distance
    }

    /// Camera position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.location.offset_from(self.center)
    }

    /// Unit up direction for the current location.
    ///
    /// Measured from a reference point 45 degrees of latitude behind the
    /// camera at [`up_vector_distance`](Self::up_vector_distance). Both
    /// points turn together as the camera orbits, so the result rotates
    /// smoothly through the poles.
    #[must_use]
    pub fn up_vector(&self) -> Vec3 {
        let reference = Polar::with_radius(
            self.location.longitude,
            self.location.latitude - UP_REFERENCE_LATITUDE_OFFSET,
            self.up_vector_distance,
        );
        // Both points share the center, so it cancels out.
        (self.location.to_cartesian() - reference.to_cartesian())
            .normalize()
            .as_vec3()
    }

    /// Pose for the host camera, looking at `target`.
    ///
    /// The target is usually the orbited body's center but can be any
    /// tracked point; the controller does not own it.
    #[must_use]
    pub fn pose(&self, target: Vec3) -> CameraPose {
        CameraPose {
            eye: self.eye(),
            target,
            up: self.up_vector(),
        }
    }

    /// Interpret an externally picked point (e.g. a ray hit on the globe)
    /// as coordinates around the center. The radius is measured from the
    /// point.
    #[must_use]
    pub fn locate(&self, point: Vec3) -> Polar {
        Polar::from_surface_point(self.center, point)
    }

    /// Current angles next to the angles recovered by projecting the camera
    /// direction onto the probe sphere and converting back.
    #[must_use]
    pub fn diagnostics(&self) -> OrbitDiagnostics {
        let center = self.center.as_dvec3();
        let probe = center
            + Polar::with_radius(
                self.location.longitude,
                self.location.latitude,
                self.probe_radius,
            )
            .to_cartesian();
        let recovered =
            Polar::from_cartesian(probe - center, self.probe_radius);

        OrbitDiagnostics {
            longitude: self.location.longitude,
            latitude: self.location.latitude,
            recovered_longitude: recovered.longitude,
            recovered_latitude: recovered.latitude,
        }
    }

    fn set_radius(&mut self, radius: f32) {
        let clamped = radius.max(self.min_radius).min(self.max_radius);
        if clamped != radius {
            log::trace!("orbit radius {radius} clamped to {clamped}");
        }
        self.location.radius = clamped;
        self.up_vector_distance = clamped * clamped * 2.0;
    }
}

/// Orbit angles paired with the same angles after a round trip through
/// Cartesian space, for logging.
///
/// The recovered latitude is always in `[-90, 90]`, so a camera past the
/// pole reports the mirrored longitude and latitude here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDiagnostics {
    /// Controller longitude in degrees.
    pub longitude: f32,
    /// Controller latitude in degrees.
    pub latitude: f32,
    /// Longitude recovered from the Cartesian position.
    pub recovered_longitude: f32,
    /// Latitude recovered from the Cartesian position.
    pub recovered_latitude: f32,
}

impl fmt::Display for OrbitDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cam lon/lat: {:.3}, {:.3} | recovered lon/lat: {:.3}, {:.3}",
            self.longitude,
            self.latitude,
            self.recovered_longitude,
            self.recovered_latitude
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::options::MIN_ORBIT_RADIUS;

    const EPS: f32 = 1e-4;

    fn controller_at(longitude: f32, latitude: f32, radius: f32) -> OrbitController {
        let options = OrbitOptions {
            initial_longitude: longitude,
            initial_latitude: latitude,
            initial_radius: radius,
            ..OrbitOptions::default()
        };
        OrbitController::new(&options, Vec3::ZERO)
    }

    fn held(actions: &[OrbitAction]) -> OrbitInput {
        OrbitInput::from_actions(actions.iter().copied())
    }

    #[test]
    fn starts_at_configured_location() {
        let controller =
            OrbitController::new(&OrbitOptions::default(), Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(controller.location(), Polar::with_radius(180.0, 180.0, 12.0));
        assert_eq!(controller.up_vector_distance(), 288.0);
        // lon 180, lat 180 is back on +X.
        assert!(controller
            .eye()
            .abs_diff_eq(Vec3::new(12.0, 0.0, 10.0), EPS));
    }

    #[test]
    fn initial_radius_is_clamped() {
        let controller = controller_at(0.0, 0.0, 50.0);
        assert_eq!(controller.location().radius, 12.0);
    }

    #[test]
    fn longitude_wraps_past_full_turn() {
        let options = OrbitOptions {
            move_speed: 20.0,
            initial_longitude: 350.0,
            initial_latitude: 0.0,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);
        controller.update(1.0, &held(&[OrbitAction::MoveRight]));
        assert_eq!(controller.location().longitude, 10.0);
    }

    #[test]
    fn longitude_wraps_below_zero() {
        let options = OrbitOptions {
            move_speed: 20.0,
            initial_longitude: 5.0,
            initial_latitude: 0.0,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);
        controller.update(1.0, &held(&[OrbitAction::MoveLeft]));
        assert_eq!(controller.location().longitude, 345.0);
    }

    #[test]
    fn latitude_wraps_over_the_pole() {
        let options = OrbitOptions {
            move_speed: 20.0,
            initial_longitude: 0.0,
            initial_latitude: 350.0,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);
        controller.update(1.0, &held(&[OrbitAction::MoveUp]));
        assert_eq!(controller.location().latitude, 10.0);

        controller.update(1.0, &held(&[OrbitAction::MoveDown]));
        controller.update(1.0, &held(&[OrbitAction::MoveDown]));
        assert_eq!(controller.location().latitude, 330.0);
    }

    #[test]
    fn idle_update_is_a_no_op() {
        let mut controller = controller_at(123.5, 271.25, 9.0);
        let before = controller.location();
        controller.update(0.016, &OrbitInput::default());
        assert_eq!(controller.location(), before);
    }

    #[test]
    fn first_action_on_an_axis_wins() {
        let options = OrbitOptions {
            move_speed: 10.0,
            initial_longitude: 100.0,
            initial_latitude: 20.0,
            initial_radius: 9.0,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);
        controller.update(1.0, &held(&OrbitAction::ALL));

        let location = controller.location();
        assert_eq!(location.latitude, 30.0);
        assert_eq!(location.longitude, 90.0);
        assert_eq!(location.radius, 12.0);
    }

    #[test]
    fn axes_update_independently() {
        let options = OrbitOptions {
            move_speed: 10.0,
            zoom_speed: 1.0,
            initial_longitude: 100.0,
            initial_latitude: 20.0,
            initial_radius: 9.0,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);
        controller.update(
            1.0,
            &held(&[
                OrbitAction::MoveDown,
                OrbitAction::MoveRight,
                OrbitAction::ZoomOut,
            ]),
        );

        assert_eq!(
            controller.location(),
            Polar::with_radius(110.0, 10.0, 8.0)
        );
    }

    #[test]
    fn polarity_flips_horizontal_actions() {
        let options = OrbitOptions {
            move_speed: 10.0,
            initial_longitude: 100.0,
            horizontal_polarity: HorizontalPolarity::LeftIncreases,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);

        controller.update(1.0, &held(&[OrbitAction::MoveLeft]));
        assert_eq!(controller.location().longitude, 110.0);

        controller.update(2.0, &held(&[OrbitAction::MoveRight]));
        assert_eq!(controller.location().longitude, 90.0);
    }

    #[test]
    fn zoom_stops_at_both_limits() {
        let mut controller = controller_at(0.0, 0.0, 12.0);

        controller.update(1.0, &held(&[OrbitAction::ZoomIn]));
        assert_eq!(controller.location().radius, 12.0);

        controller.update(10.0, &held(&[OrbitAction::ZoomOut]));
        assert_eq!(controller.location().radius, 6.0);
        assert_eq!(controller.up_vector_distance(), 72.0);
    }

    #[test]
    fn zoom_never_leaves_range() {
        let mut rng = StdRng::seed_from_u64(0x200_0001);
        let mut controller = controller_at(0.0, 0.0, 9.0);
        let (min, max) = controller.zoom_range();

        for _ in 0..5000 {
            let action = if rng.random_bool(0.5) {
                OrbitAction::ZoomIn
            } else {
                OrbitAction::ZoomOut
            };
            let dt = rng.random_range(0.0..0.25);
            controller.update(dt, &held(&[action]));

            let radius = controller.location().radius;
            assert!((min..=max).contains(&radius), "radius {radius} escaped");
            assert_eq!(controller.up_vector_distance(), radius * radius * 2.0);
        }
    }

    #[test]
    fn angles_stay_wrapped_under_random_input() {
        let mut rng = StdRng::seed_from_u64(0x200_0002);
        let mut controller = controller_at(0.0, 0.0, 9.0);

        for _ in 0..5000 {
            let input = OrbitInput::from_actions(
                OrbitAction::ALL
                    .into_iter()
                    .filter(|_| rng.random_bool(0.4)),
            );
            controller.update(rng.random_range(0.0..0.25), &input);

            let location = controller.location();
            assert!((0.0..360.0).contains(&location.longitude));
            assert!((0.0..360.0).contains(&location.latitude));
        }
    }

    #[test]
    fn eye_is_center_plus_offset() {
        let mut controller = controller_at(90.0, 0.0, 10.0);
        controller.set_center(Vec3::new(1.0, 2.0, 3.0));
        assert!(controller
            .eye()
            .abs_diff_eq(Vec3::new(1.0, 2.0, 13.0), EPS));
    }

    #[test]
    fn up_vector_points_north_on_the_equator() {
        let controller = controller_at(0.0, 0.0, 10.0);
        let up = controller.up_vector();
        assert!((up.length() - 1.0).abs() < EPS);
        assert!(up.y > 0.0);
        assert!(up.z.abs() < EPS);
    }

    #[test]
    fn up_vector_ignores_center_translation() {
        let mut controller = controller_at(37.0, 61.0, 8.0);
        let at_origin = controller.up_vector();
        controller.set_center(Vec3::new(0.0, 0.0, 10.0));
        assert!(controller.up_vector().abs_diff_eq(at_origin, EPS));
    }

    #[test]
    fn up_vector_turns_smoothly_through_the_poles() {
        let options = OrbitOptions {
            move_speed: 60.0,
            initial_longitude: 30.0,
            initial_latitude: 0.0,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);
        let up_held = held(&[OrbitAction::MoveUp]);
        let mut previous = controller.up_vector();

        // Two full turns at half a degree per frame crosses 90 and 270
        // four times.
        for _ in 0..1440 {
            controller.update(1.0 / 120.0, &up_held);
            let pose = controller.pose(Vec3::ZERO);

            assert!(
                previous.dot(pose.up) > 0.999,
                "up vector jumped at lat {}",
                controller.location().latitude
            );
            assert!(pose.up.dot(pose.forward()).abs() < 0.99);
            previous = pose.up;
        }
    }

    #[test]
    fn up_vector_stays_clear_of_view_at_smallest_radius() {
        let options = OrbitOptions {
            min_radius: MIN_ORBIT_RADIUS,
            initial_radius: MIN_ORBIT_RADIUS,
            initial_latitude: 0.0,
            ..OrbitOptions::default()
        };
        let mut controller = OrbitController::new(&options, Vec3::ZERO);
        let up_held = held(&[OrbitAction::MoveUp]);

        for _ in 0..720 {
            controller.update(1.0 / 120.0, &up_held);
            let pose = controller.pose(Vec3::ZERO);
            assert!(pose.up.dot(pose.forward()).abs() < 0.9);
        }
    }

    #[test]
    fn diagnostics_hold_near_the_pole() {
        let controller = controller_at(75.0, 89.99, 10.0);
        let diag = controller.diagnostics();
        assert!((diag.recovered_latitude - 89.99).abs() < EPS);
    }

    #[test]
    fn pose_carries_external_target() {
        let controller = controller_at(0.0, 0.0, 10.0);
        let target = Vec3::new(0.0, 0.0, 10.0);
        let pose = controller.pose(target);
        assert_eq!(pose.target, target);
        assert_eq!(pose.eye, controller.eye());
        assert_eq!(pose.up, controller.up_vector());
    }

    #[test]
    fn diagnostics_match_in_front_hemisphere() {
        let controller = controller_at(40.0, 30.0, 10.0);
        let diag = controller.diagnostics();
        assert!((diag.recovered_longitude - 40.0).abs() < EPS);
        assert!((diag.recovered_latitude - 30.0).abs() < EPS);
    }

    #[test]
    fn diagnostics_map_wrapped_latitude_to_signed() {
        let controller = controller_at(40.0, 300.0, 10.0);
        let diag = controller.diagnostics();
        assert!((diag.recovered_longitude - 40.0).abs() < EPS);
        assert!((diag.recovered_latitude + 60.0).abs() < EPS);
    }

    #[test]
    fn diagnostics_mirror_past_the_pole() {
        let controller = controller_at(40.0, 180.0, 10.0);
        let diag = controller.diagnostics();
        assert!((diag.recovered_longitude - 220.0).abs() < EPS);
        assert!(diag.recovered_latitude.abs() < EPS);
        assert!(diag.to_string().starts_with("cam lon/lat: 40.000, 180.000"));
    }

    #[test]
    fn locate_measures_picked_points() {
        let mut controller = controller_at(0.0, 0.0, 10.0);
        let center = Vec3::new(0.0, 0.0, 10.0);
        controller.set_center(center);

        let picked = Polar::with_radius(100.0, 20.0, 5.0).offset_from(center);
        let located = controller.locate(picked);
        assert!((located.longitude - 100.0).abs() < EPS);
        assert!((located.latitude - 20.0).abs() < EPS);
        assert!((located.radius - 5.0).abs() < EPS);
    }

    #[test]
    fn set_location_wraps_and_clamps() {
        let mut controller = controller_at(0.0, 0.0, 10.0);
        controller.set_location(Polar::with_radius(-30.0, 400.0, 1.0));
        assert_eq!(
            controller.location(),
            Polar::with_radius(330.0, 40.0, 6.0)
        );
    }

    #[test]
    fn apply_options_reclamps_radius() {
        let mut controller = controller_at(0.0, 0.0, 12.0);
        let narrower = OrbitOptions {
            max_radius: 8.0,
            ..OrbitOptions::default()
        };
        controller.apply_options(&narrower);
        assert_eq!(controller.zoom_range(), (6.0, 8.0));
        assert_eq!(controller.location().radius, 8.0);
        assert_eq!(controller.up_vector_distance(), 128.0);
    }
}
