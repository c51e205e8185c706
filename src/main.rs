//! Space Invaders entry point
//!
//! Headless frontend: runs the fixed-step loop with the autopilot (or an idle
//! player), logs the HUD and optionally streams scenes as JSON lines for an
//! external renderer.

use std::process::ExitCode;

use space_invaders::Settings;
use space_invaders::autopilot::Autopilot;
use space_invaders::platform::{Driver, HudLogger, Idle, InputSource, JsonLines, Presenter};

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Space Invaders (headless) starting...");

    let settings = match Settings::from_args(std::env::args()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let scenes = settings
        .print_scenes
        .then(|| JsonLines::new(std::io::stdout().lock()));
    let presenter = (HudLogger::new(settings.hud_log_interval), scenes);

    if settings.autopilot {
        run(&settings, Autopilot::new(settings.auto_restart), presenter);
    } else {
        run(&settings, Idle, presenter);
    }

    ExitCode::SUCCESS
}

fn run<I: InputSource, P: Presenter>(settings: &Settings, input: I, presenter: P) {
    let mut driver = Driver::from_settings(settings, input, presenter);
    driver.run(settings.realtime);

    for (i, entry) in driver.high_scores().entries.iter().enumerate() {
        log::info!(
            "#{:>2}  {:>6}  level {}  ({} ticks)",
            i + 1,
            entry.score,
            entry.level,
            entry.ticks
        );
    }
}
