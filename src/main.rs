//! Headless companion dashboard demo.
//!
//! Runs a scripted sequence of user commands against the real store, toast
//! channel and gauges at the normal frame rate, rendering every frame into an
//! off-screen [`SimulatorDisplay`]. When the script is done and the last toast
//! has faded, the final vehicle state is logged.
//!
//! ```text
//! companion-dashboard [FRAME.png]
//! ```
//!
//! With a path argument the last frame is written there as a PNG image.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::thread;
use std::time::{Duration, Instant};

use companion_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use companion_common::{ClimateMode, ClimatePreset};
use companion_dashboard::config::FRAME_TIME;
use companion_dashboard::render::draw_frame;
use companion_dashboard::{Clock, Command, Dashboard, SystemClock, VehicleStore, logging};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

/// Commands to run, each after the given delay from the previous one.
const SCRIPT: [(Duration, Command); 12] = [
    (Duration::from_millis(500), Command::ToggleLock),
    (Duration::from_millis(1200), Command::ToggleEngine),
    (Duration::from_millis(1200), Command::ToggleClimate),
    (Duration::from_millis(400), Command::TemperatureUp),
    (Duration::from_millis(200), Command::SetFanSpeed(3)),
    (Duration::from_millis(200), Command::SetClimateMode(ClimateMode::FaceFeet)),
    (Duration::from_millis(800), Command::ApplyPreset(ClimatePreset::Comfort)),
    (Duration::from_millis(600), Command::RefreshTelemetry),
    (Duration::from_millis(800), Command::ToggleHeadlights),
    (Duration::from_millis(900), Command::SoundHorn),
    (Duration::from_millis(300), Command::SoundHorn),
    (Duration::from_millis(1500), Command::ToggleLock),
];

/// Upper bound on the run, in case something never settles.
const MAX_RUN_TIME: Duration = Duration::from_secs(30);

fn main() {
    logging::init();

    let clock = SystemClock;
    let store = VehicleStore::default();
    let mut dashboard = Dashboard::new(store.clone(), clock, StdRng::from_entropy());
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

    info!(
        vehicle = store.state().id(),
        listeners = store.subscriber_count(),
        "Headless dashboard started"
    );

    let started = clock.now();
    let mut next_step = started;
    let mut script = SCRIPT.iter().peekable();
    let mut frames = 0u32;

    loop {
        let frame_start = Instant::now();

        if let Some((delay, _)) = script.peek()
            && frame_start >= next_step + *delay
        {
            next_step += *delay;
            if let Some((_, command)) = script.next() {
                dashboard.execute(*command);
            }
        }

        dashboard.update();
        draw_frame(&mut display, &dashboard);
        frames = frames.wrapping_add(1);

        let settled = script.peek().is_none()
            && !dashboard.toast().is_visible()
            && !dashboard.gauges().is_animating();
        if settled || frame_start.duration_since(started) >= MAX_RUN_TIME {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    let vehicle = store.state();
    info!(
        frames,
        locked = vehicle.is_locked,
        running = vehicle.is_running,
        climate_on = vehicle.climate.is_on,
        temperature = vehicle.climate.temperature,
        fan = vehicle.climate.fan_speed,
        mode = vehicle.climate.mode.as_str(),
        fuel = vehicle.fuel_level,
        battery = vehicle.battery_level,
        "Final vehicle state"
    );
    for entry in dashboard.activity().iter() {
        info!(message = entry.text(), repeats = entry.repeats(), "Activity");
    }

    if let Some(path) = std::env::args().nth(1) {
        let output_settings = OutputSettingsBuilder::new().build();
        let image = display.to_rgb_output_image(&output_settings);
        match image.save_png(&path) {
            Ok(()) => info!(%path, "Last frame written"),
            Err(err) => error!(%path, %err, "Could not write frame"),
        }
    }
}
