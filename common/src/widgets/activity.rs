//! Recent activity list under the gauges.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::activity::{ACTIVITY_LINE_LENGTH, ActivityLog};
use crate::config::{ACTIVITY_LINE_HEIGHT, ACTIVITY_TOP_Y, MARGIN_X};
use crate::styles::{LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LEFT_ALIGNED};

/// Room for a full message plus a " (x65535)" repeat suffix.
const LINE_CAPACITY: usize = ACTIVITY_LINE_LENGTH + 9;

/// Draw the log oldest first. The newest line is highlighted.
pub fn draw_activity<D>(display: &mut D, log: &ActivityLog)
where
    D: DrawTarget<Color = Rgb565>,
{
    let newest = log.len().saturating_sub(1);
    for (i, entry) in log.iter().enumerate() {
        let mut line: String<LINE_CAPACITY> = String::new();
        write!(line, "{entry}").ok();

        let style = if i == newest {
            LABEL_STYLE_WHITE
        } else {
            LABEL_STYLE_GRAY
        };
        let y = ACTIVITY_TOP_Y + i as i32 * ACTIVITY_LINE_HEIGHT;
        Text::with_text_style(&line, Point::new(MARGIN_X, y), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}
