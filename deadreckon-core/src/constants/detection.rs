//! Detection Constants
//!
//! Thresholds for second-derivative motion detection and ZUPT stationary
//! detection.

// ===== MOTION DETECTION =====

/// Minimum sequence length for the central second difference.
///
/// One interior point needs a neighbour on each side.
pub const MIN_MOTION_SAMPLES: usize = 3;

/// Value written for samples classified as moving.
pub const MOTION_FLAG: f64 = 1.0;

/// Value written for samples classified as still (and for both boundaries).
pub const STILL_FLAG: f64 = 0.0;

/// Default acceleration magnitude threshold for motion (units/s²).
///
/// Set for position-like signals in metres: 0.5 m/s² separates walking
/// from sensor jitter at typical pedestrian sampling rates.
pub const DEFAULT_MOTION_THRESHOLD: f64 = 0.5;

// ===== ZERO VELOCITY UPDATE =====

/// Default stationary threshold on acceleration magnitude (m/s²).
///
/// Gravity-compensated acceleration of a resting sensor stays within a few
/// tenths of a m/s² of zero.
pub const DEFAULT_ZUPT_THRESHOLD_M_PER_S2: f64 = 0.3;

/// Default number of consecutive still samples required before ZUPT (samples).
///
/// 10 samples at 50 Hz is a 200 ms stance, shorter than a normal foot-flat.
pub const DEFAULT_ZUPT_RUN_SAMPLES: usize = 10;

/// Stationary threshold for the foot-mounted preset (m/s²).
pub const FOOT_MOUNTED_ZUPT_THRESHOLD_M_PER_S2: f64 = 0.2;

/// Run length for the foot-mounted preset (samples).
///
/// 100 Hz sampling, so this is still ~150 ms of stance.
pub const FOOT_MOUNTED_ZUPT_RUN_SAMPLES: usize = 15;

/// Status code reported when a stationary interval was confirmed.
pub const ZUPT_STATUS_STATIONARY: i32 = 1;

/// Status code reported when the scan finished without a stationary interval.
pub const ZUPT_STATUS_NOT_STATIONARY: i32 = 0;

/// Status code reported when the detector could not evaluate its input.
pub const ZUPT_STATUS_INVALID: i32 = -1;
