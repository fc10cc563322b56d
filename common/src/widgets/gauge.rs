//! Fuel and battery level bars.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::draw_bar;
use crate::colors::{DARK_GRAY, GREEN, ORANGE, RED};
use crate::config::{
    BATTERY_GAUGE_Y, FUEL_GAUGE_Y, GAUGE_BAR_HEIGHT, GAUGE_BAR_WIDTH, GAUGE_BAR_X, GAUGE_VALUE_X,
    MARGIN_X,
};
use crate::limits::{BATTERY_LOW, FUEL_LOW, LEVEL_WARNING};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, LEFT_ALIGNED, VALUE_STYLE_WHITE};

/// Which level a gauge shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GaugeKind {
    Fuel,
    Battery,
}

impl GaugeKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fuel => "FUEL",
            Self::Battery => "BATT",
        }
    }

    /// Top edge of this gauge's row.
    pub const fn row_y(self) -> i32 {
        match self {
            Self::Fuel => FUEL_GAUGE_Y,
            Self::Battery => BATTERY_GAUGE_Y,
        }
    }

    /// Level below which the gauge turns red.
    pub const fn low_threshold(self) -> u8 {
        match self {
            Self::Fuel => FUEL_LOW,
            Self::Battery => BATTERY_LOW,
        }
    }
}

/// Bar color for `percent`: red when low, orange below the warning level, green otherwise.
pub fn gauge_color(kind: GaugeKind, percent: f32) -> Rgb565 {
    if percent < f32::from(kind.low_threshold()) {
        RED
    } else if percent < f32::from(LEVEL_WARNING) {
        ORANGE
    } else {
        GREEN
    }
}

pub fn draw_gauge<D>(display: &mut D, kind: GaugeKind, percent: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    let y = kind.row_y();

    Text::with_text_style(
        kind.label(),
        Point::new(MARGIN_X, y + 11),
        LABEL_STYLE_WHITE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    draw_bar(
        display,
        Point::new(GAUGE_BAR_X, y),
        Size::new(GAUGE_BAR_WIDTH, GAUGE_BAR_HEIGHT),
        percent,
        DARK_GRAY,
        gauge_color(kind, percent),
    );

    let mut value: String<8> = String::new();
    write!(value, "{}%", percent.clamp(0.0, 999.0) as u32).ok();
    Text::with_text_style(
        value.as_str(),
        Point::new(GAUGE_VALUE_X, y + 14),
        VALUE_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();
}
