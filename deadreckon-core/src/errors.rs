//! Error Types for Rejected Signal-Processing Calls
//!
//! ## Design Philosophy
//!
//! Every transform in this crate validates its inputs before touching the
//! output buffer. A rejected call therefore leaves the caller's memory
//! exactly as it was, and the reason comes back as a [`DspError`] instead of
//! a silent return.
//!
//! The error type follows the same embedded-friendly rules as the rest of
//! the crate:
//!
//! 1. **Small Size**: every variant is a handful of scalars.
//! 2. **No Heap Allocation**: messages are `&'static str` only.
//! 3. **Copy Semantics**: errors are returned from hot paths by value.
//!
//! ## Error Categories
//!
//! ### Buffer Shape
//! - `EmptyInput`: nothing to process
//! - `LengthMismatch`: input and output (or velocity) buffers disagree
//! - `InsufficientData`: fewer samples than the transform needs
//!
//! ### Parameters
//! - `InvalidWindow`: moving-average window of zero
//! - `InvalidFrequency` / `InvalidSamplingRate`: non-positive or non-finite rates
//! - `InvalidThreshold`: non-positive or non-finite detection threshold
//! - `InvalidRunLength`: ZUPT run-length threshold of zero
//! - `InvalidAlpha`: smoothing factor outside (0, 1]
//!
//! ## Handling Strategy
//!
//! ```rust
//! use deadreckon_core::{smoothing::moving_average, DspError};
//!
//! let input = [1.0, 2.0, 3.0];
//! let mut output = [f64::NAN; 3];
//!
//! match moving_average(&input, &mut output, 0) {
//!     Ok(()) => {}
//!     Err(DspError::InvalidWindow) => {
//!         // Output untouched, fall back to the raw signal
//!         assert!(output.iter().all(|v| v.is_nan()));
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for signal-processing operations
pub type DspResult<T> = Result<T, DspError>;

/// Reasons a transform refused to run
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DspError {
    /// Input sequence has no samples
    #[error("Input sequence is empty")]
    EmptyInput,

    /// Companion buffers have different lengths
    #[error("Buffer length mismatch: input {input}, output {output}")]
    LengthMismatch {
        /// Length of the read-only input buffer
        input: usize,
        /// Length of the buffer that would be written
        output: usize,
    },

    /// Not enough samples for the finite-difference scheme
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of samples needed
        required: usize,
        /// Actual number of samples supplied
        available: usize,
    },

    /// Moving-average window must cover at least one sample
    #[error("Window size must be at least 1")]
    InvalidWindow,

    /// Cutoff frequency must be positive and finite
    #[error("Invalid cutoff frequency {value} Hz")]
    InvalidFrequency {
        /// Rejected cutoff frequency
        value: f64,
    },

    /// Sampling rate must be positive and finite
    #[error("Invalid sampling rate {value} Hz")]
    InvalidSamplingRate {
        /// Rejected sampling rate
        value: f64,
    },

    /// Detection threshold must be positive and finite
    #[error("Invalid threshold {value}")]
    InvalidThreshold {
        /// Rejected threshold
        value: f64,
    },

    /// ZUPT run length must be at least one sample
    #[error("Run-length threshold must be at least 1")]
    InvalidRunLength,

    /// Exponential smoothing factor outside (0, 1]
    #[error("Smoothing factor {value} outside (0, 1]")]
    InvalidAlpha {
        /// Rejected smoothing factor
        value: f64,
    },

    /// Configuration is internally inconsistent
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for DspError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyInput =>
                defmt::write!(fmt, "Empty input"),
            Self::LengthMismatch { input, output } =>
                defmt::write!(fmt, "Length mismatch {} vs {}", input, output),
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::InvalidWindow =>
                defmt::write!(fmt, "Invalid window"),
            Self::InvalidFrequency { value } =>
                defmt::write!(fmt, "Invalid cutoff {} Hz", value),
            Self::InvalidSamplingRate { value } =>
                defmt::write!(fmt, "Invalid sampling rate {} Hz", value),
            Self::InvalidThreshold { value } =>
                defmt::write!(fmt, "Invalid threshold {}", value),
            Self::InvalidRunLength =>
                defmt::write!(fmt, "Invalid run length"),
            Self::InvalidAlpha { value } =>
                defmt::write!(fmt, "Invalid alpha {}", value),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
        }
    }
}

/// Reject buffer pairs that cannot be processed together.
pub(crate) fn check_pair(input: usize, output: usize) -> DspResult<()> {
    if input == 0 {
        return Err(DspError::EmptyInput);
    }
    if input != output {
        return Err(DspError::LengthMismatch { input, output });
    }
    Ok(())
}

/// Reject sampling rates that are not finite and positive.
pub(crate) fn check_rate(value: f64) -> DspResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DspError::InvalidSamplingRate { value })
    }
}

/// Reject cutoff frequencies that are not finite and positive.
pub(crate) fn check_cutoff(value: f64) -> DspResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DspError::InvalidFrequency { value })
    }
}

/// Reject detection thresholds that are not finite and positive.
pub(crate) fn check_threshold(value: f64) -> DspResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DspError::InvalidThreshold { value })
    }
}
