//! Filter Constants
//!
//! Coefficients and defaults for the moving-average smoother and the
//! single-pole low-pass filter.

// ===== MATHEMATICAL CONSTANTS =====

/// 2π at full double precision.
///
/// Appears in the RC time constant of the single-pole filter:
/// `RC = 1 / (2π · fc)`.
pub const TWO_PI: f64 = 2.0 * core::f64::consts::PI;

// ===== EXPONENTIAL SMOOTHING =====

/// Fixed smoothing factor for in-place exponential smoothing.
///
/// Each new sample contributes 10%, the previous smoothed value 90%.
/// Equivalent to a time constant of roughly 9.5 samples.
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.1;

/// Smallest accepted smoothing factor (exclusive lower bound is 0).
///
/// Values at or below zero would freeze the output at the seed sample.
pub const MIN_SMOOTHING_ALPHA: f64 = 0.0;

/// Largest accepted smoothing factor.
///
/// At 1.0 the smoother passes the input through unchanged.
pub const MAX_SMOOTHING_ALPHA: f64 = 1.0;

// ===== MOVING AVERAGE =====

/// Default trailing window for the moving-average smoother (samples).
///
/// 13 samples at 50 Hz spans ~0.25 s, about a quarter of a walking stride.
pub const DEFAULT_WINDOW_SAMPLES: usize = 13;

/// Window used by the handheld preset (samples).
///
/// Handheld devices see more tremor, so a wider window is used.
pub const HANDHELD_WINDOW_SAMPLES: usize = 25;

/// Capacity of the fixed streaming moving-average window (samples).
///
/// Streaming averages are const-generic; this is the default `N`.
pub const STREAMING_WINDOW_CAPACITY: usize = 32;

// ===== LOW-PASS FILTER =====

/// Default low-pass cutoff frequency (Hz).
///
/// Human gait energy sits below ~5 Hz; above that is mostly sensor noise
/// and impact ringing.
pub const DEFAULT_CUTOFF_HZ: f64 = 5.0;

/// Cutoff used by the handheld preset (Hz).
pub const HANDHELD_CUTOFF_HZ: f64 = 3.0;

/// Default sampling rate assumed by presets (Hz).
///
/// Typical rate of phone and wearable IMUs in pedestrian mode.
pub const DEFAULT_SAMPLING_RATE_HZ: f64 = 50.0;

/// Sampling rate of the foot-mounted preset (Hz).
///
/// Foot-mounted units sample faster to resolve the short stance phase.
pub const FOOT_MOUNTED_SAMPLING_RATE_HZ: f64 = 100.0;
