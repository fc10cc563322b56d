//! Header bar: vehicle nickname and lock badge.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{BRAND_YELLOW, RED};
use crate::config::{HEADER_HEIGHT, MARGIN_X, SCREEN_WIDTH};
use crate::styles::{BADGE_STYLE_BLACK, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_BLACK};
use crate::vehicle::Vehicle;

const HEADER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BRAND_YELLOW);
const UNLOCKED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

const TITLE_POS: Point = Point::new(MARGIN_X, 19);
const BADGE_POS: Point = Point::new(SCREEN_WIDTH as i32 - MARGIN_X - 4, 16);
const BADGE_WIDTH: u32 = 62;
const BADGE_BG_POS: Point =
    Point::new(SCREEN_WIDTH as i32 - MARGIN_X - BADGE_WIDTH as i32, 5);
const BADGE_BG_SIZE: Size = Size::new(BADGE_WIDTH, 15);

/// Badge text for the lock state.
pub const fn lock_badge(is_locked: bool) -> &'static str {
    if is_locked { "LOCKED" } else { "UNLOCKED" }
}

pub fn draw_header<D>(display: &mut D, vehicle: &Vehicle)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT))
        .into_styled(HEADER_FILL)
        .draw(display)
        .ok();

    Text::with_text_style(
        vehicle.nickname.as_str(),
        TITLE_POS,
        TITLE_STYLE_BLACK,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    // An unlocked car gets a red badge so it stands out on the yellow bar.
    if !vehicle.is_locked {
        Rectangle::new(BADGE_BG_POS, BADGE_BG_SIZE)
            .into_styled(UNLOCKED_FILL)
            .draw(display)
            .ok();
    }
    Text::with_text_style(
        lock_badge(vehicle.is_locked),
        BADGE_POS,
        BADGE_STYLE_BLACK,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}
