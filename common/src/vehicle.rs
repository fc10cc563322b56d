//! The vehicle record shared by every screen.
//!
//! A [`Vehicle`] is always replaced as a whole. Screens clone the current
//! value, change the fields they care about and hand the result back to the
//! store. `id` and `vin` are private: the only way to obtain a vehicle with a
//! given identity is [`Vehicle::new`] or cloning an existing value, so an
//! edit made on a clone cannot change who the vehicle is.
//!
//! The identity is stored verbatim on the heap and is never shortened.
//! Display strings are fixed-capacity [`Label`]s and may be.
//!
//! Numeric fields deliberately use types wide enough to hold out-of-range
//! values (a fuel level of 120, a fan speed of 0). The store accepts them and
//! only reports them; see [`crate::validation`].

use alloc::string::String;

use heapless::Vec;

use crate::climate::Climate;
use crate::validation::{self, MAX_VIOLATIONS, RangeViolation};

/// Maximum bytes in a display string.
pub const LABEL_CAPACITY: usize = 32;

/// Fixed-capacity display string.
pub type Label = heapless::String<LABEL_CAPACITY>;

/// Build a [`Label`], truncating at a character boundary if `text` is too long.
pub fn label(text: &str) -> Label {
    let mut out = Label::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Status of one vehicle.
#[derive(Clone, PartialEq, Debug)]
pub struct Vehicle {
    id: String,
    vin: String,

    /// Owner-chosen name, e.g. "My Renault".
    pub nickname: Label,
    pub model: Label,
    pub year: u16,

    /// Door lock state. Not coupled to `is_running`.
    pub is_locked: bool,
    /// Engine state.
    pub is_running: bool,

    /// Fuel in percent. Producers are expected to keep this within 0-100.
    pub fuel_level: u8,
    /// Battery charge in percent. Producers are expected to keep this within 0-100.
    pub battery_level: u8,
    /// Kilometres.
    pub odometer_reading: u32,

    pub climate: Climate,
}

impl Vehicle {
    /// Create a vehicle with the given identity and factory status
    /// (locked, engine off, climate off).
    pub fn new(id: &str, vin: &str) -> Self {
        Self {
            id: String::from(id),
            vin: String::from(vin),
            nickname: Label::new(),
            model: Label::new(),
            year: 0,
            is_locked: true,
            is_running: false,
            fuel_level: 0,
            battery_level: 0,
            odometer_reading: 0,
            climate: Climate::new(),
        }
    }

    /// Opaque identifier, fixed at creation.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Vehicle identification number, fixed at creation.
    #[inline]
    pub fn vin(&self) -> &str {
        &self.vin
    }

    /// Values outside their documented ranges.
    ///
    /// Empty for a well-formed vehicle. Purely advisory.
    pub fn range_violations(&self) -> Vec<RangeViolation, MAX_VIOLATIONS> {
        validation::check(self)
    }
}

impl Default for Vehicle {
    /// The demo vehicle the application starts with.
    fn default() -> Self {
        let mut vehicle = Self::new("v1", "RNLTCPT24XYZ12345");
        vehicle.nickname = label("My Renault");
        vehicle.model = label("Captur");
        vehicle.year = 2024;
        vehicle.fuel_level = 72;
        vehicle.battery_level = 85;
        vehicle.odometer_reading = 3457;
        vehicle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vehicle() {
        let vehicle = Vehicle::default();
        assert_eq!(vehicle.id(), "v1");
        assert_eq!(vehicle.vin(), "RNLTCPT24XYZ12345");
        assert_eq!(vehicle.nickname.as_str(), "My Renault");
        assert_eq!(vehicle.model.as_str(), "Captur");
        assert_eq!(vehicle.year, 2024);
        assert!(vehicle.is_locked, "Demo vehicle starts locked");
        assert!(!vehicle.is_running, "Demo vehicle starts with engine off");
        assert_eq!(vehicle.fuel_level, 72);
        assert_eq!(vehicle.battery_level, 85);
        assert_eq!(vehicle.odometer_reading, 3457);
        assert!(!vehicle.climate.is_on, "Climate starts off");
    }

    #[test]
    fn test_default_vehicle_is_well_formed() {
        assert!(Vehicle::default().range_violations().is_empty());
    }

    #[test]
    fn test_clone_keeps_identity() {
        let original = Vehicle::default();
        let mut edited = original.clone();
        edited.nickname = label("Weekend car");
        edited.is_locked = false;

        assert_eq!(edited.id(), original.id());
        assert_eq!(edited.vin(), original.vin());
        assert_ne!(edited, original);
    }

    #[test]
    fn test_uuid_identity_is_kept_whole() {
        let id = "3f2b8c1e-9a4d-4e6f-b1c2-7d8e9f0a1b2c";
        let vehicle = Vehicle::new(id, "WVWZZZ1JZXW000001");
        assert_eq!(vehicle.id(), id, "Ids must never be shortened");
        assert_eq!(vehicle.vin(), "WVWZZZ1JZXW000001");
    }

    #[test]
    fn test_ids_sharing_a_long_prefix_differ() {
        let a = Vehicle::new("3f2b8c1e-9a4d-4e6f-b1c2-7d8e9f0a1b2c", "VIN");
        let b = Vehicle::new("3f2b8c1e-9a4d-4e6f-b1c2-7d8e9f0a9999", "VIN");
        assert_ne!(a.id(), b.id());
        assert_ne!(
            a, b,
            "Vehicles with different ids must not compare equal"
        );
    }

    #[test]
    fn test_label_truncates_on_char_boundary() {
        let long = "ééééééééééééééééééééééééé"; // 25 chars, 50 bytes
        let truncated = label(long);
        assert_eq!(
            truncated.len(),
            LABEL_CAPACITY,
            "Two-byte chars should fill exactly 32 bytes"
        );
        assert!(truncated.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_label_short_text_unchanged() {
        assert_eq!(label("Captur").as_str(), "Captur");
    }
}
