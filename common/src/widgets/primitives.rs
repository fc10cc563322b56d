//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

/// Width in pixels of the filled part of a bar `width` pixels wide at `percent`.
///
/// `percent` is clamped to 0-100; NaN draws an empty bar.
pub fn fill_width(width: u32, percent: f32) -> u32 {
    if percent.is_nan() {
        return 0;
    }
    let fraction = percent.clamp(0.0, 100.0) / 100.0;
    ((width as f32) * fraction + 0.5) as u32
}

/// Draw a horizontal progress bar: a dark track with a 1px inset fill.
pub fn draw_bar<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    percent: f32,
    track_color: Rgb565,
    fill_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(track_color))
        .draw(display)
        .ok();

    if size.width < 2 || size.height < 2 {
        return;
    }

    let filled = fill_width(size.width - 2, percent);
    if filled == 0 {
        return;
    }
    Rectangle::new(
        top_left + Point::new(1, 1),
        Size::new(filled, size.height - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(fill_color))
    .draw(display)
    .ok();
}
