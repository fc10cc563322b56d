//! Color constants for the companion dashboard.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! # Opacity
//!
//! The display has no alpha channel. Fading overlays (the toast) are drawn by
//! blending their colors toward the background with [`blend`].

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Primary text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Low fuel / low battery.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Engine running, healthy levels.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Brand accent (#FFCC00). Header bar, active selections.
pub const BRAND_YELLOW: Rgb565 = Rgb565::new(31, 51, 0);

/// Orange for levels approaching empty.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Inactive text and gauge track (#757575).
pub const GRAY: Rgb565 = Rgb565::new(14, 29, 14);

/// Dark gray for gauge tracks and dividers.
pub const DARK_GRAY: Rgb565 = Rgb565::new(6, 12, 6);

/// Toast background (#222222).
pub const TOAST_BG: Rgb565 = Rgb565::new(4, 8, 4);

// =============================================================================
// Blending
// =============================================================================

/// Blend two colors, `t = 0.0` giving `from` and `t = 1.0` giving `to`.
///
/// `t` is clamped to 0.0-1.0. Uses 8.8 fixed-point per channel.
pub fn blend(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let t_fixed = (t * 256.0) as i32;

    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let channel = |shift: u16, mask: u16| -> i32 {
        let a = i32::from((from_raw >> shift) & mask);
        let b = i32::from((to_raw >> shift) & mask);
        (a + (((b - a) * t_fixed) >> 8)).clamp(0, i32::from(mask))
    };

    Rgb565::new(
        channel(11, 0x1F) as u8,
        channel(5, 0x3F) as u8,
        channel(0, 0x1F) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(
            blend(BLACK, WHITE, 0.0),
            BLACK,
            "t=0 should give the start color"
        );
        assert_eq!(
            blend(BLACK, WHITE, 1.0),
            WHITE,
            "t=1 should give the end color"
        );
    }

    #[test]
    fn test_blend_clamps_t() {
        assert_eq!(blend(BLACK, RED, -3.0), BLACK);
        assert_eq!(blend(BLACK, RED, 7.5), RED);
        assert_eq!(
            blend(BLACK, RED, f32::NAN),
            BLACK,
            "NaN should be treated as fully transparent"
        );
    }

    #[test]
    fn test_blend_midpoint() {
        let mid = blend(BLACK, WHITE, 0.5).into_storage();
        let r = (mid >> 11) & 0x1F;
        let g = (mid >> 5) & 0x3F;
        let b = mid & 0x1F;
        assert_eq!(
            (r, g, b),
            (15, 31, 15),
            "Half-way blend should halve each channel"
        );
    }

    #[test]
    fn test_blend_towards_darker() {
        let faded = blend(WHITE, BLACK, 0.25).into_storage();
        let r = (faded >> 11) & 0x1F;
        assert!(
            r < 31 && r > 15,
            "Quarter fade should darken slightly, got {r}"
        );
    }
}
