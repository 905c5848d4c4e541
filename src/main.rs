//! Headless orbit session: plays a key script against the orbit controller
//! at a paced frame rate and logs the resulting camera poses.
//!
//! ```text
//! RUST_LOG=debug globe-orbit "KeyW:1.5,KeyD+KeyE:2,-:0.5" presets/slow.toml
//! ```

use std::path::Path;

use glam::Vec3;
use globe_orbit::camera::OrbitController;
use globe_orbit::input::InputScript;
use globe_orbit::options::Options;
use globe_orbit::util::frame_timing::FrameTiming;
use globe_orbit::GlobeError;

/// Center of the orbited globe in world space.
const GLOBE_CENTER: Vec3 = Vec3::new(0.0, 0.0, 10.0);
const TARGET_FPS: u32 = 60;

fn run(script_text: &str, options_path: Option<&str>) -> Result<(), GlobeError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let script = InputScript::parse(script_text, &options.keybindings)?;
    log::info!(
        "Playing {} steps ({:.2}s)",
        script.steps().len(),
        script.total_seconds()
    );

    let mut controller = OrbitController::new(&options.orbit, GLOBE_CENTER);
    let mut timing = FrameTiming::new(TARGET_FPS, options.orbit.max_frame_delta);
    log::info!("start: {}", controller.diagnostics());

    for (index, step) in script.steps().iter().enumerate() {
        let mut remaining = step.seconds;
        while remaining > 0.0 {
            std::thread::sleep(timing.time_until_next_frame());
            // Don't let the last frame of a step bleed into the next one.
            let dt = timing.end_frame().min(remaining);
            remaining -= dt;

            controller.update(dt, &step.input);
            let pose = controller.pose(GLOBE_CENTER);
            log::debug!("eye={} up={}", pose.eye, pose.up);
        }
        log::info!("step {}: {}", index + 1, controller.diagnostics());
    }

    log::info!("Finished at {:.1} fps", timing.fps());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(script) = args.next() else {
        log::error!("Usage: globe-orbit <SCRIPT> [OPTIONS.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    if let Err(e) = run(&script, options_path.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
