// Crate-level lints: allow the numeric casts pixel and percentage math relies on
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)] // Settled gauges and snapped temperatures compare exactly

//! Vehicle companion dashboard.
//!
//! Host-side half of the dashboard. Everything here needs `std` (time, heap,
//! `Rc`) and builds on the `no_std` data model and widgets in
//! [`companion_common`].
//!
//! - [`store`]: `VehicleStore`, the shared vehicle state with subscriptions
//! - [`toast`]: `ToastChannel`, the single-slot auto-dismissing notification
//! - [`dashboard`]: Command dispatcher wiring store, toast, gauges and telemetry
//! - [`gauges`]: Time-based fuel and battery gauge animation
//! - [`telemetry`]: Random mock telemetry on a refresh interval
//! - [`clock`] / [`timer`]: Injectable time source and cancellable deadline
//! - [`render`]: Frame composition onto any `Rgb565` `DrawTarget`
//! - [`config`]: Timing constants
//! - [`logging`]: `tracing` subscriber setup for the binaries
//!
//! # Threading
//!
//! Single-threaded and cooperative. The store uses `Rc`/`RefCell`, and all
//! timed behavior advances from the owner's per-frame `update()` call.

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod gauges;
pub mod logging;
pub mod render;
pub mod store;
pub mod telemetry;
pub mod timer;
pub mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dashboard::{Command, Dashboard};
pub use store::{Subscription, VehicleStore};
pub use toast::{ToastChannel, ToastPhase};
