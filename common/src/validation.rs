//! Advisory range checks for vehicle state.
//!
//! Nothing in this module rejects a value. The store calls [`check`] on every
//! write and logs what it finds; the value is stored regardless.
//!
//! A running engine on a locked vehicle is reported too. It is not a range
//! problem (remote start leaves the doors locked), so
//! [`RangeViolation::is_out_of_range`] separates it from the real bound
//! checks and the store only traces it.

use heapless::Vec;
use thiserror::Error;

use crate::limits::{is_valid_fan_speed, is_valid_level, is_valid_temperature};
use crate::vehicle::Vehicle;

/// Upper bound on violations a single vehicle can produce (one per check).
pub const MAX_VIOLATIONS: usize = 5;

/// A field outside its documented range.
#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum RangeViolation {
    #[error("fuel level {0}% is above 100%")]
    FuelLevel(u8),

    #[error("battery level {0}% is above 100%")]
    BatteryLevel(u8),

    #[error("target temperature {0}C is not a 0.5C step within 16-30C")]
    Temperature(f32),

    #[error("fan speed {0} is outside 1-5")]
    FanSpeed(u8),

    #[error("vehicle is locked while the engine is running")]
    LockedWhileRunning,
}

impl RangeViolation {
    /// `true` for a value outside its documented bounds, `false` for the
    /// locked-and-running combination.
    pub const fn is_out_of_range(&self) -> bool {
        !matches!(self, Self::LockedWhileRunning)
    }
}

/// Collect every range violation in `vehicle`.
pub fn check(vehicle: &Vehicle) -> Vec<RangeViolation, MAX_VIOLATIONS> {
    let mut found = Vec::new();

    if !is_valid_level(vehicle.fuel_level) {
        found.push(RangeViolation::FuelLevel(vehicle.fuel_level)).ok();
    }
    if !is_valid_level(vehicle.battery_level) {
        found.push(RangeViolation::BatteryLevel(vehicle.battery_level)).ok();
    }
    if !is_valid_temperature(vehicle.climate.temperature) {
        found.push(RangeViolation::Temperature(vehicle.climate.temperature)).ok();
    }
    if !is_valid_fan_speed(vehicle.climate.fan_speed) {
        found.push(RangeViolation::FanSpeed(vehicle.climate.fan_speed)).ok();
    }
    if vehicle.is_locked && vehicle.is_running {
        found.push(RangeViolation::LockedWhileRunning).ok();
    }

    found
}
