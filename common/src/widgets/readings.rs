//! Range, cabin and outside temperature, and tire pressure warning.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{MARGIN_X, READINGS_LINE_Y, SCREEN_WIDTH};
use crate::styles::{LABEL_STYLE_RED, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};

/// Maximum characters in the readings summary.
pub const READINGS_TEXT_LENGTH: usize = 40;

const WARNING_POS: Point = Point::new(SCREEN_WIDTH as i32 - MARGIN_X, READINGS_LINE_Y);

/// Values shown on the readings line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Readings<'a> {
    /// Estimated range in kilometres.
    pub range_km: u32,
    pub cabin_temperature: f32,
    /// `None` until the first telemetry sample.
    pub outside_temperature: Option<i8>,
    /// Drawn in red on the right; `None` when every tire is normal.
    pub tire_warning: Option<&'a str>,
}

/// Readings summary, e.g. `RANGE 396km  IN 23.0C  OUT 20C`.
pub fn readings_summary(readings: &Readings<'_>) -> String<READINGS_TEXT_LENGTH> {
    let mut text = String::new();
    write!(
        text,
        "RANGE {}km  IN {:.1}C  OUT ",
        readings.range_km, readings.cabin_temperature
    )
    .ok();
    match readings.outside_temperature {
        Some(celsius) => write!(text, "{celsius}C").ok(),
        None => text.push_str("--").ok(),
    };
    text
}

pub fn draw_readings<D>(display: &mut D, readings: &Readings<'_>)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(
        readings_summary(readings).as_str(),
        Point::new(MARGIN_X, READINGS_LINE_Y),
        LABEL_STYLE_WHITE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    if let Some(warning) = readings.tire_warning {
        Text::with_text_style(warning, WARNING_POS, LABEL_STYLE_RED, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}
