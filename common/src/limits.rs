//! Centralized value ranges for the vehicle state.
//!
//! These are the ranges the UI controls work within. The store itself never
//! enforces them: out-of-range values are accepted and reported through
//! [`crate::validation`]. The clamping helpers here are meant for the
//! command layer (sliders, stepper buttons, fan selector).
//!
//! # Compile-Time Validation
//!
//! Each group includes `const` assertions that verify ordering at compile
//! time, so a misconfigured range fails the build.

use micromath::F32;

// =============================================================================
// Climate Target Temperature
// =============================================================================

/// Lowest selectable target temperature (Celsius).
pub const TEMPERATURE_MIN: f32 = 16.0;

/// Highest selectable target temperature (Celsius).
pub const TEMPERATURE_MAX: f32 = 30.0;

/// Slider granularity. Targets are always a multiple of this value.
pub const TEMPERATURE_SLIDER_STEP: f32 = 0.5;

/// Step applied by the +/- buttons on the main dashboard.
pub const TEMPERATURE_BUTTON_STEP: f32 = 1.0;

const _: () = assert!(TEMPERATURE_MIN < TEMPERATURE_MAX);
const _: () = assert!(TEMPERATURE_SLIDER_STEP > 0.0);
const _: () = assert!(TEMPERATURE_BUTTON_STEP >= TEMPERATURE_SLIDER_STEP);

// =============================================================================
// Fan Speed
// =============================================================================

/// Lowest fan level.
pub const FAN_SPEED_MIN: u8 = 1;

/// Highest fan level.
pub const FAN_SPEED_MAX: u8 = 5;

const _: () = assert!(FAN_SPEED_MIN < FAN_SPEED_MAX);

// =============================================================================
// Fuel / Battery Levels
// =============================================================================

/// Full tank / full charge, in percent.
pub const LEVEL_MAX: u8 = 100;

/// Fuel below this level is drawn red.
pub const FUEL_LOW: u8 = 15;

/// Battery below this level is drawn red.
pub const BATTERY_LOW: u8 = 20;

/// Either level below this is drawn orange.
pub const LEVEL_WARNING: u8 = 30;

const _: () = assert!(FUEL_LOW < LEVEL_WARNING);
const _: () = assert!(BATTERY_LOW < LEVEL_WARNING);
const _: () = assert!(LEVEL_WARNING < LEVEL_MAX);

// =============================================================================
// Helpers
// =============================================================================

/// Check whether a target temperature is inside the range and on the slider grid.
#[inline]
pub fn is_valid_temperature(celsius: f32) -> bool {
    if celsius.is_nan() || !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&celsius) {
        return false;
    }
    let steps = celsius / TEMPERATURE_SLIDER_STEP;
    F32(steps).round().0 == steps
}

/// Clamp a raw slider value into range and round it to the nearest 0.5C.
///
/// NaN maps to `TEMPERATURE_MIN`.
pub fn snap_temperature(celsius: f32) -> f32 {
    if celsius.is_nan() {
        return TEMPERATURE_MIN;
    }
    let clamped = celsius.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
    F32(clamped / TEMPERATURE_SLIDER_STEP).round().0 * TEMPERATURE_SLIDER_STEP
}

/// Check whether a fan level is one the selector can show.
#[inline]
pub const fn is_valid_fan_speed(level: u8) -> bool {
    level >= FAN_SPEED_MIN && level <= FAN_SPEED_MAX
}

/// Clamp a fan level into `FAN_SPEED_MIN..=FAN_SPEED_MAX`.
#[inline]
pub const fn clamp_fan_speed(level: u8) -> u8 {
    if level < FAN_SPEED_MIN {
        FAN_SPEED_MIN
    } else if level > FAN_SPEED_MAX {
        FAN_SPEED_MAX
    } else {
        level
    }
}

/// Check whether a fuel or battery percentage is representable on a gauge.
#[inline]
pub const fn is_valid_level(percent: u8) -> bool {
    percent <= LEVEL_MAX
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_range_ordering() {
        assert!(TEMPERATURE_MIN < TEMPERATURE_MAX);
    }

    #[test]
    fn test_level_threshold_ordering() {
        assert!(FUEL_LOW < LEVEL_WARNING);
        assert!(BATTERY_LOW < LEVEL_WARNING);
    }

    #[test]
    fn test_is_valid_temperature() {
        assert!(is_valid_temperature(16.0), "Lower bound is valid");
        assert!(is_valid_temperature(30.0), "Upper bound is valid");
        assert!(is_valid_temperature(22.5), "Half steps are valid");
        assert!(
            !is_valid_temperature(22.3),
            "Off-grid values are invalid"
        );
        assert!(!is_valid_temperature(15.5), "Below range is invalid");
        assert!(!is_valid_temperature(30.5), "Above range is invalid");
        assert!(!is_valid_temperature(f32::NAN), "NaN is invalid");
    }

    #[test]
    fn test_snap_temperature() {
        assert_eq!(snap_temperature(22.3), 22.5);
        assert_eq!(snap_temperature(22.2), 22.0);
        assert_eq!(snap_temperature(10.0), TEMPERATURE_MIN);
        assert_eq!(snap_temperature(45.0), TEMPERATURE_MAX);
        assert_eq!(snap_temperature(f32::NAN), TEMPERATURE_MIN);
    }

    #[test]
    fn test_clamp_fan_speed() {
        assert_eq!(clamp_fan_speed(0), 1);
        assert_eq!(clamp_fan_speed(3), 3);
        assert_eq!(clamp_fan_speed(9), 5);
        assert!(is_valid_fan_speed(5));
        assert!(!is_valid_fan_speed(6));
    }

    #[test]
    fn test_is_valid_level() {
        assert!(is_valid_level(0));
        assert!(is_valid_level(100));
        assert!(!is_valid_level(101));
    }
}
