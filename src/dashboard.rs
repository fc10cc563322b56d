//! Command dispatcher tying the store, toast, gauges and telemetry together.
//!
//! Screens never mutate the vehicle directly. They send a [`Command`]; the
//! dashboard computes the next vehicle from the current one, writes it to the
//! [`VehicleStore`] and, for user-facing actions, shows a toast and records it
//! in the activity log.
//!
//! Windows, headlights and sunroof are quick actions with no place in the
//! vehicle record. Their state lives here and only drives the notification
//! text.
//!
//! The gauges are an ordinary store consumer: a subscription forwards every
//! written fuel and battery level, and [`Dashboard::update`] retargets the
//! gauges from it on the next tick.

use std::cell::Cell;
use std::rc::Rc;

use companion_common::activity::ActivityLog;
use companion_common::limits::{
    TEMPERATURE_BUTTON_STEP, TEMPERATURE_MAX, TEMPERATURE_MIN, clamp_fan_speed, snap_temperature,
};
use companion_common::{ClimateMode, ClimatePreset, Vehicle};
use rand::Rng;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::gauges::GaugeSet;
use crate::store::{Subscription, VehicleStore};
use crate::telemetry::{DashboardData, Telemetry};
use crate::toast::ToastChannel;

/// A user action.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    ToggleLock,
    ToggleEngine,
    ToggleClimate,
    /// Slider input, snapped to the 0.5C grid within 16-30C.
    SetTemperature(f32),
    TemperatureUp,
    TemperatureDown,
    /// Fan selector input, clamped to 1-5.
    SetFanSpeed(u8),
    SetClimateMode(ClimateMode),
    ApplyPreset(ClimatePreset),
    ToggleAc,
    ToggleRecirculation,
    ToggleRearDefrost,
    ToggleHeatedSeats,
    ToggleWindows,
    ToggleHeadlights,
    ToggleSunroof,
    SoundHorn,
    DismissToast,
    RefreshTelemetry,
}

/// Quick-action toggles, all off at startup.
#[derive(Clone, Copy, Default, Debug)]
struct QuickActions {
    windows_open: bool,
    headlights_on: bool,
    sunroof_open: bool,
}

pub struct Dashboard<C: Clock + Clone, R: Rng> {
    store: VehicleStore,
    clock: C,
    toast: ToastChannel<C>,
    gauges: GaugeSet,
    /// Latest (fuel, battery) written to the store, not yet applied to the gauges.
    gauge_targets: Rc<Cell<Option<(u8, u8)>>>,
    gauge_feed: Option<Subscription>,
    telemetry: Telemetry<R>,
    latest_telemetry: Option<DashboardData>,
    activity: ActivityLog,
    quick_actions: QuickActions,
}

impl<C: Clock + Clone, R: Rng> Dashboard<C, R> {
    pub fn new(store: VehicleStore, clock: C, rng: R) -> Self {
        let (fuel, battery) =
            store.with_state(|vehicle| (vehicle.fuel_level, vehicle.battery_level));
        let gauge_targets = Rc::new(Cell::new(None));

        let feed = Rc::clone(&gauge_targets);
        let gauge_feed = store.subscribe(move |vehicle| {
            feed.set(Some((vehicle.fuel_level, vehicle.battery_level)));
        });

        let now = clock.now();
        Self {
            toast: ToastChannel::new(clock.clone()),
            telemetry: Telemetry::new(rng, now),
            store,
            clock,
            gauges: GaugeSet::new(fuel, battery),
            gauge_targets,
            gauge_feed: Some(gauge_feed),
            latest_telemetry: None,
            activity: ActivityLog::new(),
            quick_actions: QuickActions::default(),
        }
    }

    /// Apply `command` to the store and show its notification, if any.
    pub fn execute(&mut self, command: Command) {
        info!(?command, "Command");

        match command {
            Command::ToggleLock => {
                if self.store.with_state(|vehicle| vehicle.is_locked) {
                    self.store.unlock();
                    self.notify("Vehicle unlocked successfully");
                } else {
                    self.store.lock();
                    self.notify("Vehicle locked successfully");
                }
            }
            Command::ToggleEngine => {
                let was_running = self.store.with_state(|vehicle| vehicle.is_running);
                self.store.patch(|vehicle| vehicle.is_running = !was_running);
                let message = if was_running {
                    "Engine turned off"
                } else {
                    "Remote start initiated"
                };
                self.notify(message);
            }
            Command::ToggleClimate => {
                let was_on = self.store.with_state(|vehicle| vehicle.climate.is_on);
                self.store.patch(|vehicle| vehicle.climate.is_on = !was_on);
                let message = if was_on {
                    "Climate turned off"
                } else {
                    "Climate turned on"
                };
                self.notify(message);
            }
            Command::SetTemperature(celsius) => {
                let snapped = snap_temperature(celsius);
                self.store.patch(|vehicle| vehicle.climate.temperature = snapped);
            }
            Command::TemperatureUp => {
                let current = self.store.with_state(|vehicle| vehicle.climate.temperature);
                if current < TEMPERATURE_MAX {
                    let next = (current + TEMPERATURE_BUTTON_STEP).min(TEMPERATURE_MAX);
                    self.store.patch(|vehicle| vehicle.climate.temperature = next);
                }
            }
            Command::TemperatureDown => {
                let current = self.store.with_state(|vehicle| vehicle.climate.temperature);
                if current > TEMPERATURE_MIN {
                    let next = (current - TEMPERATURE_BUTTON_STEP).max(TEMPERATURE_MIN);
                    self.store.patch(|vehicle| vehicle.climate.temperature = next);
                }
            }
            Command::SetFanSpeed(level) => {
                let level = clamp_fan_speed(level);
                self.store.patch(|vehicle| vehicle.climate.fan_speed = level);
            }
            Command::SetClimateMode(mode) => {
                self.store.patch(|vehicle| vehicle.climate.mode = mode);
            }
            Command::ApplyPreset(preset) => {
                self.store.patch(|vehicle| vehicle.climate = preset.apply(vehicle.climate));
                self.notify(&format!("{} preset applied", preset.name()));
            }
            Command::ToggleAc => {
                self.store.patch(|vehicle| {
                    vehicle.climate.is_ac_on = !vehicle.climate.is_ac_on;
                });
            }
            Command::ToggleRecirculation => {
                self.store.patch(|vehicle| {
                    vehicle.climate.is_recirculation_on = !vehicle.climate.is_recirculation_on;
                });
            }
            Command::ToggleRearDefrost => {
                self.store.patch(|vehicle| {
                    vehicle.climate.is_rear_defrost_on = !vehicle.climate.is_rear_defrost_on;
                });
            }
            Command::ToggleHeatedSeats => {
                self.store.patch(|vehicle| {
                    vehicle.climate.is_heated_seats_on = !vehicle.climate.is_heated_seats_on;
                });
            }
            Command::ToggleWindows => {
                let open = !self.quick_actions.windows_open;
                self.quick_actions.windows_open = open;
                let message = if open {
                    "Windows opening"
                } else {
                    "Windows closing"
                };
                self.notify(message);
            }
            Command::ToggleHeadlights => {
                let on = !self.quick_actions.headlights_on;
                self.quick_actions.headlights_on = on;
                self.notify(if on { "Headlights on" } else { "Headlights off" });
            }
            Command::ToggleSunroof => {
                let open = !self.quick_actions.sunroof_open;
                self.quick_actions.sunroof_open = open;
                let message = if open {
                    "Sunroof opening"
                } else {
                    "Sunroof closing"
                };
                self.notify(message);
            }
            Command::SoundHorn => self.notify("Horn activated"),
            Command::DismissToast => self.toast.dismiss(),
            Command::RefreshTelemetry => {
                let data = self.telemetry.sample();
                self.apply_telemetry(data);
            }
        }
    }

    /// Per-frame tick. Returns `true` if anything on screen may have changed.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = self.toast.update();

        if let Some(data) = self.telemetry.poll(now) {
            self.apply_telemetry(data);
            changed = true;
        }

        if let Some((fuel, battery)) = self.gauge_targets.take() {
            self.gauges.set_levels(fuel, battery, now);
        }
        changed |= self.gauges.update(now);

        changed
    }

    /// Current vehicle snapshot.
    pub fn vehicle(&self) -> Vehicle {
        self.store.state()
    }

    pub const fn store(&self) -> &VehicleStore {
        &self.store
    }

    pub const fn toast(&self) -> &ToastChannel<C> {
        &self.toast
    }

    pub const fn gauges(&self) -> &GaugeSet {
        &self.gauges
    }

    pub const fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Most recent telemetry sample, if one has been taken.
    pub const fn latest_telemetry(&self) -> Option<&DashboardData> {
        self.latest_telemetry.as_ref()
    }

    fn notify(&mut self, message: &str) {
        self.activity.push(message);
        self.toast.show(message);
    }

    fn apply_telemetry(&mut self, data: DashboardData) {
        debug!(
            fuel = data.fuel_level,
            battery = data.battery_level,
            cabin = data.cabin_temperature,
            "Applying telemetry"
        );
        self.store.patch(|vehicle| {
            vehicle.fuel_level = data.fuel_level;
            vehicle.battery_level = data.battery_level;
            vehicle.climate.cabin_temperature = f32::from(data.cabin_temperature);
        });
        self.latest_telemetry = Some(data);
    }
}

impl<C: Clock + Clone, R: Rng> Drop for Dashboard<C, R> {
    fn drop(&mut self) {
        if let Some(feed) = self.gauge_feed.take() {
            feed.unsubscribe();
        }
    }
}
