//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible in
//! embedded-graphics 0.8, so every fixed-color style lives here.
//!
//! # Dynamic Color Styles
//!
//! The toast fades by blending its colors, so its text color changes every
//! frame during a fade. For that case the font is exposed on its own
//! ([`TOAST_FONT`]) and callers build `MonoTextStyle::new(TOAST_FONT, color)`.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

use crate::colors::{BLACK, GRAY, RED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for gauge percentages.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for status lines, activity list and toast text.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the lock badge in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Toast message font (`ProFont` 12pt).
pub const TOAST_FONT: &MonoFont = &PROFONT_12_POINT;

/// Status line font. Exposed so status colors can follow engine/climate state.
pub const STATUS_FONT: &MonoFont = &PROFONT_12_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for gauge labels.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for the activity list.
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Small red text for the tire pressure warning.
pub const LABEL_STYLE_RED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, RED);

/// Header title, black on the brand-yellow bar.
pub const TITLE_STYLE_BLACK: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&FONT_10X20, BLACK);

/// Small black text for the lock badge on the header bar.
pub const BADGE_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Gauge percentage value (`ProFont` 18pt).
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
