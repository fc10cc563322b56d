//! Climate sub-state of a vehicle.
//!
//! # Air Distribution
//!
//! [`ClimateMode`] replaces the string literals used by the screens
//! (`"face"`, `"face-feet"`, `"feet"`, `"face-defrost"`). The wire names are
//! still available through [`ClimateMode::as_str`].
//!
//! # Presets
//!
//! A [`ClimatePreset`] rewrites the temperature, fan, mode and A/C fields in
//! one go and leaves every other climate field untouched:
//!
//! | Preset  | Temp | Fan | Mode         | A/C |
//! |---------|------|-----|--------------|-----|
//! | Defrost | 24C  | 4   | face-defrost | on  |
//! | Comfort | 22C  | 2   | face         | on  |
//! | Eco     | 23C  | 1   | face         | off |
//! | Max     | 18C  | 4   | face         | on  |

/// Air distribution mode.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ClimateMode {
    /// Vents at face level.
    #[default]
    Face,
    /// Face and footwell vents.
    FaceFeet,
    /// Footwell vents only.
    Feet,
    /// Face vents plus windscreen defrost.
    FaceDefrost,
}

impl ClimateMode {
    /// All modes in selector order.
    pub const ALL: [Self; 4] = [Self::Face, Self::FaceFeet, Self::Feet, Self::FaceDefrost];

    /// Wire name used by the screens.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::FaceFeet => "face-feet",
            Self::Feet => "feet",
            Self::FaceDefrost => "face-defrost",
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Face => "Face",
            Self::FaceFeet => "Face & Feet",
            Self::Feet => "Feet",
            Self::FaceDefrost => "Defrost",
        }
    }

    /// Cycle to the next mode in selector order.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Face => Self::FaceFeet,
            Self::FaceFeet => Self::Feet,
            Self::Feet => Self::FaceDefrost,
            Self::FaceDefrost => Self::Face,
        }
    }
}

/// Climate control state.
///
/// When `is_on` is false the other fields are inert but retained, so turning
/// the system back on restores the previous settings.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Climate {
    /// Master switch.
    pub is_on: bool,
    /// Target temperature in Celsius (UI range 16-30 in 0.5 steps).
    pub temperature: f32,
    /// Fan level (UI range 1-5).
    pub fan_speed: u8,
    /// Air distribution.
    pub mode: ClimateMode,
    pub is_ac_on: bool,
    pub is_recirculation_on: bool,
    pub is_rear_defrost_on: bool,
    pub is_heated_seats_on: bool,
    /// Cabin temperature as last reported. Display only, not derived from `temperature`.
    pub cabin_temperature: f32,
    /// Automatic climate mode.
    pub auto_mode: bool,
}

impl Climate {
    /// Factory settings: off, 22C, fan 2, face vents, A/C armed, cabin at 23C.
    pub const fn new() -> Self {
        Self {
            is_on: false,
            temperature: 22.0,
            fan_speed: 2,
            mode: ClimateMode::Face,
            is_ac_on: true,
            is_recirculation_on: false,
            is_rear_defrost_on: false,
            is_heated_seats_on: false,
            cabin_temperature: 23.0,
            auto_mode: false,
        }
    }
}

impl Default for Climate {
    fn default() -> Self {
        Self::new()
    }
}

/// One-tap climate configurations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClimatePreset {
    Defrost,
    Comfort,
    Eco,
    Max,
}

impl ClimatePreset {
    /// All presets in the order the screen lists them.
    pub const ALL: [Self; 4] = [Self::Defrost, Self::Comfort, Self::Eco, Self::Max];

    /// Capitalised name, as used in the "... preset applied" notification.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Defrost => "Defrost",
            Self::Comfort => "Comfort",
            Self::Eco => "Eco",
            Self::Max => "Max",
        }
    }

    /// Cycle to the next preset.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Defrost => Self::Comfort,
            Self::Comfort => Self::Eco,
            Self::Eco => Self::Max,
            Self::Max => Self::Defrost,
        }
    }

    /// Return `climate` with this preset's fields applied.
    pub const fn apply(self, climate: Climate) -> Climate {
        let (temperature, fan_speed, mode, is_ac_on) = match self {
            Self::Defrost => (24.0, 4, ClimateMode::FaceDefrost, true),
            Self::Comfort => (22.0, 2, ClimateMode::Face, true),
            Self::Eco => (23.0, 1, ClimateMode::Face, false),
            Self::Max => (18.0, 4, ClimateMode::Face, true),
        };
        Climate {
            temperature,
            fan_speed,
            mode,
            is_ac_on,
            ..climate
        }
    }
}
