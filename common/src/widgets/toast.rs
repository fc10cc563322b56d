//! Toast overlay.
//!
//! The display has no alpha channel, so opacity is rendered by blending every
//! toast color toward the black screen background. The toast also slides up
//! into place as it becomes opaque.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, BRAND_YELLOW, GRAY, TOAST_BG, WHITE, blend};
use crate::config::{TOAST_HEIGHT, TOAST_SLIDE_DISTANCE, TOAST_WIDTH, TOAST_X, TOAST_Y};
use crate::styles::{LEFT_ALIGNED, RIGHT_ALIGNED, TOAST_FONT};

const TEXT_INSET_X: i32 = 12;
const TEXT_BASELINE: i32 = 22;
const ACCENT_WIDTH: u32 = 4;

/// Top edge of the toast at `opacity`.
///
/// Fully opaque sits at `TOAST_Y`; fully transparent sits `TOAST_SLIDE_DISTANCE` lower.
pub fn toast_top(opacity: f32) -> i32 {
    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    TOAST_Y + ((1.0 - opacity) * TOAST_SLIDE_DISTANCE as f32 + 0.5) as i32
}

/// Draw `message` in the toast box at `opacity` (0.0-1.0). Nothing is drawn at zero opacity.
pub fn draw_toast<D>(display: &mut D, message: &str, opacity: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    if opacity.is_nan() || opacity <= 0.0 {
        return;
    }

    let top_left = Point::new(TOAST_X, toast_top(opacity));
    let background = blend(BLACK, TOAST_BG, opacity);
    let accent = blend(BLACK, BRAND_YELLOW, opacity);

    Rectangle::new(top_left, Size::new(TOAST_WIDTH, TOAST_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(background))
        .draw(display)
        .ok();

    Rectangle::new(top_left, Size::new(ACCENT_WIDTH, TOAST_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(accent))
        .draw(display)
        .ok();

    Text::with_text_style(
        message,
        top_left + Point::new(TEXT_INSET_X, TEXT_BASELINE),
        MonoTextStyle::new(TOAST_FONT, blend(BLACK, WHITE, opacity)),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    // Close glyph
    Text::with_text_style(
        "x",
        top_left + Point::new(TOAST_WIDTH as i32 - 10, TEXT_BASELINE),
        MonoTextStyle::new(TOAST_FONT, blend(BLACK, GRAY, opacity)),
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}
