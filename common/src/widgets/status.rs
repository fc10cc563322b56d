//! Engine and climate status lines.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::climate::Climate;
use crate::colors::{GRAY, GREEN, WHITE};
use crate::config::{CLIMATE_LINE_Y, ENGINE_LINE_Y, MARGIN_X, STATUS_VALUE_X};
use crate::styles::{LEFT_ALIGNED, STATUS_FONT};

/// Maximum characters in a status value.
pub const STATUS_TEXT_LENGTH: usize = 40;

const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(STATUS_FONT, GRAY);

/// Climate summary, e.g. `22.5C  FAN 2  Face & Feet`, or `OFF`.
pub fn climate_summary(climate: &Climate) -> String<STATUS_TEXT_LENGTH> {
    let mut text = String::new();
    if climate.is_on {
        write!(
            text,
            "{:.1}C  FAN {}  {}",
            climate.temperature, climate.fan_speed, climate.mode.label()
        )
        .ok();
    } else {
        text.push_str("OFF").ok();
    }
    text
}

pub fn draw_status<D>(display: &mut D, is_running: bool, climate: &Climate)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(
        "ENGINE",
        Point::new(MARGIN_X, ENGINE_LINE_Y),
        LABEL_STYLE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    let (engine_text, engine_color) = if is_running {
        ("RUNNING", GREEN)
    } else {
        ("OFF", GRAY)
    };
    Text::with_text_style(
        engine_text,
        Point::new(STATUS_VALUE_X, ENGINE_LINE_Y),
        MonoTextStyle::new(STATUS_FONT, engine_color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    Text::with_text_style(
        "CLIMATE",
        Point::new(MARGIN_X, CLIMATE_LINE_Y),
        LABEL_STYLE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    let climate_color = if climate.is_on { WHITE } else { GRAY };
    Text::with_text_style(
        climate_summary(climate).as_str(),
        Point::new(STATUS_VALUE_X, CLIMATE_LINE_Y),
        MonoTextStyle::new(STATUS_FONT, climate_color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
}
