//! Animated fuel and battery gauges.
//!
//! Instead of jumping when a new reading arrives, a gauge ramps linearly from
//! the value it is currently showing to the new target over
//! [`GAUGE_TRANSITION`]. Progress is computed from wall-clock time, so the
//! animation takes the same time at any frame rate:
//!
//! ```text
//! value = from + (target - from) * min(elapsed / GAUGE_TRANSITION, 1)
//! ```
//!
//! A new target while a ramp is running starts a fresh ramp from the value on
//! screen, so the bar never jumps backwards.

use std::time::Instant;

use crate::config::{GAUGE_SNAP_THRESHOLD, GAUGE_TRANSITION};

/// One animated level in percent.
#[derive(Clone, Copy, Debug)]
pub struct Gauge {
    current: f32,
    from: f32,
    target: f32,
    /// Start of the running ramp; `None` when settled.
    started: Option<Instant>,
}

impl Gauge {
    /// A settled gauge showing `value`.
    pub const fn new(value: f32) -> Self {
        Self {
            current: value,
            from: value,
            target: value,
            started: None,
        }
    }

    /// Start moving toward `target`. Returns `true` if a new ramp was started.
    pub fn set_target(&mut self, target: f32, now: Instant) -> bool {
        if target == self.target {
            return false;
        }
        self.update(now);
        self.from = self.current;
        self.target = target;
        self.started = Some(now);
        true
    }

    /// Advance the ramp to `now`. Returns `true` if the displayed value changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started);
        let t = (elapsed.as_secs_f32() / GAUGE_TRANSITION.as_secs_f32()).min(1.0);
        let next = self.from + (self.target - self.from) * t;

        let previous = self.current;
        if t >= 1.0 || (self.target - next).abs() < GAUGE_SNAP_THRESHOLD {
            self.current = self.target;
            self.started = None;
        } else {
            self.current = next;
        }
        self.current != previous
    }

    /// Value to draw.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.current
    }

    #[cfg(test)]
    pub const fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub const fn is_animating(&self) -> bool {
        self.started.is_some()
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// The fuel and battery gauges shown on the dashboard.
#[derive(Clone, Copy, Default, Debug)]
pub struct GaugeSet {
    pub fuel: Gauge,
    pub battery: Gauge,
}

impl GaugeSet {
    /// Gauges already settled at the given levels.
    pub fn new(fuel_level: u8, battery_level: u8) -> Self {
        Self {
            fuel: Gauge::new(f32::from(fuel_level)),
            battery: Gauge::new(f32::from(battery_level)),
        }
    }

    /// Retarget both gauges.
    pub fn set_levels(&mut self, fuel_level: u8, battery_level: u8, now: Instant) {
        self.fuel.set_target(f32::from(fuel_level), now);
        self.battery.set_target(f32::from(battery_level), now);
    }

    /// Advance both gauges. Returns `true` if either value changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let fuel = self.fuel.update(now);
        let battery = self.battery.update(now);
        fuel || battery
    }

    pub const fn is_animating(&self) -> bool {
        self.fuel.is_animating() || self.battery.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_settled_gauge_does_not_change() {
        let start = Instant::now();
        let mut gauge = Gauge::new(72.0);
        assert!(!gauge.update(start + Duration::from_secs(5)));
        assert!(approx(gauge.value(), 72.0));
        assert!(!gauge.is_animating());
    }

    #[test]
    fn test_ramp_is_time_based() {
        let start = Instant::now();
        let mut gauge = Gauge::new(40.0);
        assert!(gauge.set_target(80.0, start));

        gauge.update(start + GAUGE_TRANSITION / 2);
        assert!(
            approx(gauge.value(), 60.0),
            "Half-way in time is half-way in value, got {}",
            gauge.value()
        );

        gauge.update(start + GAUGE_TRANSITION);
        assert!(approx(gauge.value(), 80.0));
        assert!(
            !gauge.is_animating(),
            "Ramp ends exactly at the transition time"
        );
    }

    #[test]
    fn test_frame_rate_independent() {
        let start = Instant::now();
        let mut coarse = Gauge::new(0.0);
        let mut fine = Gauge::new(0.0);
        coarse.set_target(100.0, start);
        fine.set_target(100.0, start);

        for frame in 1..=15u32 {
            fine.update(start + Duration::from_millis(u64::from(frame) * 20));
        }
        coarse.update(start + Duration::from_millis(300));

        assert!(
            approx(coarse.value(), fine.value()),
            "{} vs {}",
            coarse.value(),
            fine.value()
        );
    }

    #[test]
    fn test_retarget_mid_ramp_starts_from_current_value() {
        let start = Instant::now();
        let mut gauge = Gauge::new(0.0);
        gauge.set_target(100.0, start);

        let mid = start + GAUGE_TRANSITION / 2;
        gauge.set_target(20.0, mid);
        assert!(
            approx(gauge.value(), 50.0),
            "Retarget must not jump, got {}",
            gauge.value()
        );

        gauge.update(mid + GAUGE_TRANSITION);
        assert!(approx(gauge.value(), 20.0));
    }

    #[test]
    fn test_snaps_near_target() {
        let start = Instant::now();
        let mut gauge = Gauge::new(50.0);
        gauge.set_target(50.2, start);
        gauge.update(start + Duration::from_millis(1));
        assert_eq!(
            gauge.value(),
            50.2,
            "Differences under the snap threshold settle immediately"
        );
        assert!(!gauge.is_animating());
    }

    #[test]
    fn test_same_target_is_ignored() {
        let start = Instant::now();
        let mut gauge = Gauge::new(30.0);
        assert!(!gauge.set_target(30.0, start));
        assert!(!gauge.is_animating());
    }

    #[test]
    fn test_gauge_set() {
        let start = Instant::now();
        let mut gauges = GaugeSet::new(72, 85);
        gauges.set_levels(60, 85, start);
        assert!(gauges.fuel.is_animating());
        assert!(
            !gauges.battery.is_animating(),
            "Unchanged level does not animate"
        );

        assert!(gauges.update(start + GAUGE_TRANSITION));
        assert!(approx(gauges.fuel.value(), 60.0));
        assert!(!gauges.is_animating());
    }
}
