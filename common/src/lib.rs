//! Common types and constants for the vehicle companion dashboard.
//!
//! This crate contains platform-agnostic code shared between the host
//! dashboard library and the desktop simulator:
//!
//! - [`vehicle`]: The `Vehicle` record held by the store
//! - [`climate`]: Climate sub-state, air distribution modes and presets
//! - [`limits`]: Documented value ranges with compile-time validation
//! - [`validation`]: Advisory range checks (never reject, only report)
//! - [`activity`]: Fixed-capacity log of recent notifications
//! - [`colors`]: RGB565 palette and opacity blending
//! - [`config`]: Screen layout constants
//! - [`styles`]: Pre-computed text styles
//! - [`widgets`]: Drawing functions generic over `DrawTarget<Color = Rgb565>`
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and avoids `std::time`. Display strings
//! use `heapless::String`. The only heap use is the vehicle identity, which
//! needs `alloc`.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod activity;
pub mod climate;
pub mod colors;
pub mod config;
pub mod limits;
pub mod styles;
pub mod validation;
pub mod vehicle;
pub mod widgets;

// Re-export commonly used items
pub use climate::{Climate, ClimateMode, ClimatePreset};
pub use validation::RangeViolation;
pub use vehicle::{Label, Vehicle, label};
