use web_time::{Duration, Instant};

/// Frame timing with FPS calculation, optional frame limiting, and a
/// clamped frame delta
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Longest delta `end_frame` will report, in seconds
    max_delta: f32,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    ///
    /// `max_delta` caps the per-frame delta so a stall (window drag,
    /// breakpoint) doesn't turn into one huge orbit step.
    #[must_use]
    pub fn new(target_fps: u32, max_delta: f32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            max_delta,
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Call at the start of each frame. Returns true if enough time has passed
    /// to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left until the next frame is due.
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after rendering to update timing. Returns the frame delta in
    /// seconds, clamped to `max_delta`.
    pub fn end_frame(&mut self) -> f32 {
        self.end_frame_at(Instant::now())
    }

    fn end_frame_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        frame_time.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0, 0.25);
        assert!(timing.should_render());
        assert_eq!(timing.time_until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn capped_timer_waits_for_the_frame_interval() {
        let timing = FrameTiming::new(1, 0.25);
        // A one-second interval cannot have elapsed yet.
        assert!(!timing.should_render());
        assert!(timing.time_until_next_frame() > Duration::ZERO);
    }

    #[test]
    fn delta_is_reported_in_seconds() {
        let mut timing = FrameTiming::new(60, 0.25);
        let start = timing.last_frame;
        let dt = timing.end_frame_at(start + Duration::from_millis(20));
        assert!((dt - 0.02).abs() < 1e-6);
    }

    #[test]
    fn long_stalls_are_clamped() {
        let mut timing = FrameTiming::new(60, 0.25);
        let start = timing.last_frame;
        let dt = timing.end_frame_at(start + Duration::from_secs(5));
        assert_eq!(dt, 0.25);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut timing = FrameTiming::new(0, 0.25);
        let mut now = timing.last_frame;
        for _ in 0..400 {
            now += Duration::from_millis(10);
            let _ = timing.end_frame_at(now);
        }
        assert!((timing.fps() - 100.0).abs() < 1.0);
    }
}
