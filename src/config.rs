//! Timing configuration constants.
//!
//! These use `std::time::Duration`, which is not available in `no_std`, so
//! they live here rather than in the common crate. Screen layout constants are
//! in [`companion_common::config`].

use std::time::Duration;

// =============================================================================
// Frame Timing
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

// =============================================================================
// Toast Timing
// =============================================================================

/// Fade-in from transparent to opaque.
pub const TOAST_FADE_IN: Duration = Duration::from_millis(300);

/// Time a toast stays fully visible before it starts fading out.
pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);

/// Fade-out from opaque to transparent.
pub const TOAST_FADE_OUT: Duration = Duration::from_millis(300);

/// Quick fade-out used when a new message replaces a visible one.
pub const TOAST_CROSS_FADE: Duration = Duration::from_millis(150);

const _: () = assert!(TOAST_CROSS_FADE.as_millis() < TOAST_FADE_OUT.as_millis());
const _: () = assert!(TOAST_FADE_IN.as_millis() < TOAST_VISIBLE.as_millis());

// =============================================================================
// Gauges & Telemetry
// =============================================================================

/// Time a gauge takes to travel from its current value to a new target.
pub const GAUGE_TRANSITION: Duration = Duration::from_millis(600);

/// Gauges snap to their target once within this many percentage points.
pub const GAUGE_SNAP_THRESHOLD: f32 = 0.25;

/// Interval between mock telemetry refreshes.
pub const TELEMETRY_REFRESH: Duration = Duration::from_secs(60);

const _: () = assert!(GAUGE_TRANSITION.as_millis() > FRAME_TIME.as_millis());
