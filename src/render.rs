//! Frame composition.
//!
//! The whole screen is cleared and redrawn every frame. Status text changes
//! length and the toast slides over the activity list, so partial redraws
//! would leave remnants.
//!
//! | Layer         | Source                                         |
//! |---------------|------------------------------------------------|
//! | Header        | Vehicle nickname and lock state                |
//! | Status lines  | Engine and climate state                       |
//! | Gauges        | Animated fuel and battery levels               |
//! | Readings      | Range, temperatures and tire warning           |
//! | Activity list | Recent notifications                           |
//! | Toast         | Current notification at its opacity            |
//!
//! Range comes from the latest telemetry sample. Before the first sample it
//! is estimated from the vehicle's fuel level.

use companion_common::colors::BLACK;
use companion_common::widgets::{
    GaugeKind, Readings, draw_activity, draw_gauge, draw_header, draw_readings, draw_status,
    draw_toast,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use rand::Rng;

use crate::clock::Clock;
use crate::dashboard::Dashboard;
use crate::telemetry::estimated_range;

/// Draw one complete frame of `dashboard` onto `display`.
pub fn draw_frame<D, C, R>(display: &mut D, dashboard: &Dashboard<C, R>)
where
    D: DrawTarget<Color = Rgb565>,
    C: Clock + Clone,
    R: Rng,
{
    display.clear(BLACK).ok();

    let telemetry = dashboard.latest_telemetry();
    dashboard.store().with_state(|vehicle| {
        draw_header(display, vehicle);
        draw_status(display, vehicle.is_running, &vehicle.climate);

        let range_km = telemetry.map_or(estimated_range(vehicle.fuel_level), |data| data.range_km);
        let readings = Readings {
            range_km,
            cabin_temperature: vehicle.climate.cabin_temperature,
            outside_temperature: telemetry.map(|data| data.outside_temperature),
            tire_warning: telemetry.and_then(|data| data.tire_pressure.warning()),
        };
        draw_readings(display, &readings);
    });

    let gauges = dashboard.gauges();
    draw_gauge(display, GaugeKind::Fuel, gauges.fuel.value());
    draw_gauge(display, GaugeKind::Battery, gauges.battery.value());

    draw_activity(display, dashboard.activity());

    let toast = dashboard.toast();
    if let Some(message) = toast.message() {
        draw_toast(display, message, toast.opacity());
    }
}
