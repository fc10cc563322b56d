//! Layout and display configuration constants.
//!
//! All positions are computed at compile time so widgets never do layout
//! arithmetic per frame.
//!
//! ```text
//! +----------------------------------------------+  0
//! | My Renault                         LOCKED    |  header (26px)
//! +----------------------------------------------+
//! | ENGINE   OFF                                 |  status lines
//! | CLIMATE  22.0C  FAN 2  Face                  |
//! | FUEL  [##############------]        72%      |  gauges
//! | BATT  [#################---]        85%      |
//! | RANGE 396km  IN 23.0C  OUT 20C   Low - Rear R|  readings
//! | recent activity ...                          |  activity list
//! |  +----------------------------------------+  |
//! |  | Vehicle unlocked successfully        x |  |  toast
//! |  +----------------------------------------+  |
//! +----------------------------------------------+ 240
//! ```

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Horizontal margin used by every row.
pub const MARGIN_X: i32 = 8;

// =============================================================================
// Status Lines
// =============================================================================

/// Baseline of the engine status line.
pub const ENGINE_LINE_Y: i32 = 46;

/// Baseline of the climate status line.
pub const CLIMATE_LINE_Y: i32 = 66;

/// X offset where status values start (after the "CLIMATE" label).
pub const STATUS_VALUE_X: i32 = 80;

// =============================================================================
// Gauges
// =============================================================================

/// Top of the fuel gauge row.
pub const FUEL_GAUGE_Y: i32 = 82;

/// Top of the battery gauge row.
pub const BATTERY_GAUGE_Y: i32 = 106;

/// Left edge of the gauge bar (after the label).
pub const GAUGE_BAR_X: i32 = 48;

/// Gauge bar width.
pub const GAUGE_BAR_WIDTH: u32 = 200;

/// Gauge bar height.
pub const GAUGE_BAR_HEIGHT: u32 = 14;

/// Center of the percentage text to the right of the bar.
pub const GAUGE_VALUE_X: i32 = 284;

// =============================================================================
// Readings Line
// =============================================================================

/// Baseline of the range / temperature / tire pressure line.
pub const READINGS_LINE_Y: i32 = 131;

// =============================================================================
// Activity List
// =============================================================================

/// Baseline of the first activity line.
pub const ACTIVITY_TOP_Y: i32 = 144;

/// Line pitch of the activity list.
pub const ACTIVITY_LINE_HEIGHT: i32 = 10;

// =============================================================================
// Toast
// =============================================================================

/// Toast left edge (20px from the screen edge, like the phone layout).
pub const TOAST_X: i32 = 20;

/// Toast width.
pub const TOAST_WIDTH: u32 = SCREEN_WIDTH - 40;

/// Toast height.
pub const TOAST_HEIGHT: u32 = 36;

/// Toast top edge when fully visible.
pub const TOAST_Y: i32 = (SCREEN_HEIGHT - TOAST_HEIGHT) as i32 - 8;

/// Extra downward offset of a fully transparent toast. It slides up as it fades in.
pub const TOAST_SLIDE_DISTANCE: i32 = 20;

const _: () = assert!(FUEL_GAUGE_Y + GAUGE_BAR_HEIGHT as i32 <= BATTERY_GAUGE_Y);
const _: () = assert!(GAUGE_BAR_X + (GAUGE_BAR_WIDTH as i32) < GAUGE_VALUE_X);
const _: () = assert!(
    BATTERY_GAUGE_Y + GAUGE_BAR_HEIGHT as i32 + 10 <= READINGS_LINE_Y
);
const _: () = assert!(READINGS_LINE_Y + ACTIVITY_LINE_HEIGHT <= ACTIVITY_TOP_Y);
const _: () = assert!(TOAST_Y + (TOAST_HEIGHT as i32) <= SCREEN_HEIGHT as i32);
