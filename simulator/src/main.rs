//! Vehicle companion dashboard in a desktop window.
//!
//! Uses the embedded-graphics simulator to show the same 320x240 frame the
//! headless binary renders, driven from the keyboard:
//!
//! | Key        | Command                       |
//! |------------|-------------------------------|
//! | L          | Lock / unlock                 |
//! | E          | Remote start / engine off     |
//! | C          | Climate on / off              |
//! | Up / Down  | Temperature +1C / -1C         |
//! | 1-5        | Fan speed                     |
//! | M          | Next air distribution mode    |
//! | P          | Next climate preset           |
//! | A          | A/C on / off                  |
//! | V          | Recirculation on / off        |
//! | F          | Rear defrost on / off         |
//! | S          | Heated seats on / off         |
//! | W          | Open / close windows          |
//! | H          | Headlights on / off           |
//! | O          | Open / close sunroof          |
//! | B          | Horn                          |
//! | D          | Dismiss toast                 |
//! | R          | Refresh telemetry             |
//! | Q / Esc    | Quit                          |

use std::thread;
use std::time::Instant;

use companion_common::ClimatePreset;
use companion_common::colors::BLACK;
use companion_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use companion_dashboard::config::FRAME_TIME;
use companion_dashboard::render::draw_frame;
use companion_dashboard::{Command, Dashboard, SystemClock, VehicleStore, logging};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Map a key press to a dashboard command. `Q`/`Esc` are handled by the caller.
fn command_for(
    keycode: Keycode,
    dashboard: &Dashboard<SystemClock, StdRng>,
    preset: &mut ClimatePreset,
) -> Option<Command> {
    let command = match keycode {
        Keycode::L => Command::ToggleLock,
        Keycode::E => Command::ToggleEngine,
        Keycode::C => Command::ToggleClimate,
        Keycode::Up => Command::TemperatureUp,
        Keycode::Down => Command::TemperatureDown,
        Keycode::Num1 => Command::SetFanSpeed(1),
        Keycode::Num2 => Command::SetFanSpeed(2),
        Keycode::Num3 => Command::SetFanSpeed(3),
        Keycode::Num4 => Command::SetFanSpeed(4),
        Keycode::Num5 => Command::SetFanSpeed(5),
        Keycode::M => {
            let mode = dashboard.store().with_state(|vehicle| vehicle.climate.mode);
            Command::SetClimateMode(mode.next())
        }
        Keycode::P => {
            let chosen = *preset;
            *preset = chosen.next();
            Command::ApplyPreset(chosen)
        }
        Keycode::A => Command::ToggleAc,
        Keycode::V => Command::ToggleRecirculation,
        Keycode::F => Command::ToggleRearDefrost,
        Keycode::S => Command::ToggleHeatedSeats,
        Keycode::W => Command::ToggleWindows,
        Keycode::H => Command::ToggleHeadlights,
        Keycode::O => Command::ToggleSunroof,
        Keycode::B => Command::SoundHorn,
        Keycode::D => Command::DismissToast,
        Keycode::R => Command::RefreshTelemetry,
        _ => return None,
    };
    Some(command)
}

fn main() {
    logging::init();

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Vehicle Companion", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let store = VehicleStore::default();
    let mut dashboard = Dashboard::new(store.clone(), SystemClock, StdRng::from_entropy());
    let mut preset = ClimatePreset::Defrost;

    info!(vehicle = store.state().id(), "Simulator started");

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat so holding a key doesn't spam toggles
                    if repeat {
                        continue;
                    }
                    if matches!(keycode, Keycode::Q | Keycode::Escape) {
                        info!("Quit requested");
                        return;
                    }
                    if let Some(command) = command_for(keycode, &dashboard, &mut preset) {
                        dashboard.execute(command);
                    }
                }
                _ => {}
            }
        }

        dashboard.update();
        draw_frame(&mut display, &dashboard);
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
