//! Mock dashboard telemetry.
//!
//! There is no real vehicle link. Every sample is randomly generated within
//! fixed bands:
//!
//! | Field          | Range / value                       |
//! |----------------|-------------------------------------|
//! | fuel           | 50-79 %                             |
//! | battery        | 60-99 %                             |
//! | range          | floor(fuel * 5.5) km                |
//! | cabin          | 21-23 C                             |
//! | outside        | 18-22 C                             |
//! | tire pressure  | low (rear right) 20% of the time    |

use std::fmt;
use std::time::Instant;

use rand::Rng;
use tracing::debug;

use crate::config::TELEMETRY_REFRESH;
use crate::timer::Timer;

/// Tire pressure warning state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TirePressure {
    Normal,
    LowRearRight,
}

impl TirePressure {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::LowRearRight => "Low - Rear Right",
        }
    }

    /// Short dashboard warning, `None` when every tire is normal.
    pub const fn warning(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::LowRearRight => Some("TIRE LOW RR"),
        }
    }
}

impl fmt::Display for TirePressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One telemetry sample.
#[derive(Clone, PartialEq, Debug)]
pub struct DashboardData {
    pub fuel_level: u8,
    pub battery_level: u8,
    pub range_km: u32,
    pub cabin_temperature: i8,
    pub outside_temperature: i8,
    pub tire_pressure: TirePressure,
}

/// Estimated range for a fuel level, `floor(fuel * 5.5)` km.
pub const fn estimated_range(fuel_level: u8) -> u32 {
    fuel_level as u32 * 11 / 2
}

/// Random telemetry source with a fixed refresh interval.
pub struct Telemetry<R: Rng> {
    rng: R,
    refresh: Timer,
}

impl<R: Rng> Telemetry<R> {
    /// First refresh falls due [`TELEMETRY_REFRESH`] after `now`.
    pub fn new(rng: R, now: Instant) -> Self {
        let mut refresh = Timer::new();
        refresh.schedule(now, TELEMETRY_REFRESH);
        Self { rng, refresh }
    }

    /// Generate a sample now, regardless of the refresh schedule.
    pub fn sample(&mut self) -> DashboardData {
        let fuel_level = self.rng.gen_range(50..80);
        let battery_level = self.rng.gen_range(60..100);
        let tire_pressure = if self.rng.gen_bool(0.2) {
            TirePressure::LowRearRight
        } else {
            TirePressure::Normal
        };

        let data = DashboardData {
            fuel_level,
            battery_level,
            range_km: estimated_range(fuel_level),
            cabin_temperature: self.rng.gen_range(21..=23),
            outside_temperature: self.rng.gen_range(18..=22),
            tire_pressure,
        };

        debug!(
            fuel = data.fuel_level,
            battery = data.battery_level,
            range = data.range_km,
            cabin = data.cabin_temperature,
            tires = %data.tire_pressure,
            "Telemetry sampled"
        );
        data
    }

    /// A fresh sample if the refresh interval has elapsed, else `None`.
    ///
    /// The next refresh is scheduled from `now`, so a long stall yields one
    /// sample rather than a burst.
    pub fn poll(&mut self, now: Instant) -> Option<DashboardData> {
        self.refresh.take_due(now)?;
        self.refresh.schedule(now, TELEMETRY_REFRESH);
        Some(self.sample())
    }
}
