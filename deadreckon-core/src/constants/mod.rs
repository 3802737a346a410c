//! Constants for deadreckon Core
//!
//! Every tuning value used by the transforms lives here, with its unit and
//! the reason it was chosen. Nothing in the signal chain embeds a bare
//! number in a formula.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Filters**: smoothing windows, cutoffs, smoothing factors
//! - **Detection**: motion and stationary thresholds
//! - **Io**: column-reader capacities and plot formatting
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in the name (`_HZ`, `_M_PER_S2`, `_SAMPLES`)
//! 3. Document where a default came from

/// Filter coefficients, windows and cutoffs.
pub mod filters;

/// Motion and ZUPT detection thresholds.
pub mod detection;

/// Tabular source and plot sink limits.
pub mod io;

// Re-export commonly used constants for convenience
pub use filters::{
    TWO_PI, DEFAULT_SMOOTHING_ALPHA, DEFAULT_WINDOW_SAMPLES,
    DEFAULT_CUTOFF_HZ, DEFAULT_SAMPLING_RATE_HZ,
};

pub use detection::{
    MIN_MOTION_SAMPLES, DEFAULT_MOTION_THRESHOLD, DEFAULT_ZUPT_THRESHOLD_M_PER_S2,
    DEFAULT_ZUPT_RUN_SAMPLES,
};

pub use io::{DEFAULT_COLUMN_CAPACITY, MAX_LINE_BYTES};
