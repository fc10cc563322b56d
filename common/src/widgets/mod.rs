//! Widget components for the companion dashboard display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod activity;
mod gauge;
mod header;
mod primitives;
mod readings;
mod status;
mod toast;

pub use activity::draw_activity;
pub use gauge::{GaugeKind, draw_gauge, gauge_color};
pub use header::{draw_header, lock_badge};
pub use primitives::{draw_bar, fill_width};
pub use readings::{READINGS_TEXT_LENGTH, Readings, draw_readings, readings_summary};
pub use status::{STATUS_TEXT_LENGTH, climate_summary, draw_status};
pub use toast::{draw_toast, toast_top};
