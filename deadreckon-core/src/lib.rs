//! Signal-conditioning core for inertial dead reckoning
//!
//! Turns raw accelerometer sequences into cleaner signals and simple motion
//! facts: moving-average smoothing, single-pole low-pass filtering, motion
//! detection from the second derivative, and zero-velocity updates (ZUPT)
//! that clamp integrated velocity while the sensor is still.
//!
//! Designed for edge devices as well as desktop analysis:
//! - Whole-buffer transforms write caller-owned slices, no allocation
//! - Streaming filters run one sample at a time on `heapless` storage
//! - Invalid parameters come back as [`DspError`], never silent no-ops
//!
//! ```
//! use deadreckon_core::{moving_average, apply_zupt, ZuptOutcome};
//!
//! let accel = [0.05, 0.02, 0.01, 0.03, 0.02];
//! let mut smoothed = [0.0; 5];
//! moving_average(&accel, &mut smoothed, 3)?;
//!
//! let mut velocity = [0.4, 0.3, 0.2, 0.1, 0.1];
//! let outcome = apply_zupt(&smoothed, &mut velocity, 0.1, 3)?;
//! assert!(matches!(outcome, ZuptOutcome::Stationary { confirmed_at: 2 }));
//! # Ok::<(), deadreckon_core::DspError>(())
//! ```
//!
//! With `std` (the default) the [`io`] module reads CSV columns and feeds
//! plot sinks, and [`pipeline::SignalChain`] runs every stage per channel.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod buffer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod lowpass;
pub mod motion;
pub mod smoothing;
pub mod traits;
pub mod zupt;

#[cfg(feature = "std")]
pub mod io;
#[cfg(feature = "std")]
pub mod pipeline;

// Public API
pub use buffer::SampleWindow;
pub use config::PipelineConfig;
pub use errors::{DspError, DspResult};
pub use lowpass::{
    low_pass, lowpass_alpha, smooth_in_place, smooth_in_place_with_alpha, ExponentialSmoother,
    LowPassFilter, OnePoleLowPass,
};
pub use motion::{count_motion, detect_movement, second_derivative, MotionDetector};
pub use smoothing::{moving_average, MovingAverage, Smoother};
pub use traits::{BufferTransform, SampleFilter};
pub use zupt::{apply_zupt, zupt_status, ZuptDetector, ZuptOutcome, ZuptState, ZuptTracker};

#[cfg(feature = "std")]
pub use pipeline::{ChannelReport, SignalChain};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
