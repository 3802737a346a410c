//! Pipeline configuration
//!
//! One [`PipelineConfig`] describes every parameter of the signal chain for a
//! single channel. Presets cover the common sensor placements; individual
//! values can be overridden with the `with_*` setters and checked with
//! [`PipelineConfig::validate`] before any buffer is processed.
//!
//! With the `serde` feature the configuration loads from any serde format:
//!
//! ```text
//! {
//!   "sampling_rate_hz": 50.0,
//!   "window_samples": 13,
//!   "cutoff_hz": 5.0,
//!   "motion_threshold": 0.5,
//!   "zupt_threshold": 0.3,
//!   "zupt_run_samples": 10
//! }
//! ```

use crate::{
    constants::{detection, filters},
    errors::{check_cutoff, check_rate, check_threshold, DspError, DspResult},
    lowpass::LowPassFilter,
    motion::MotionDetector,
    smoothing::Smoother,
    zupt::ZuptDetector,
};

/// Parameters for one channel of the signal chain
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Sampling rate shared by every stage (Hz)
    pub sampling_rate_hz: f64,
    /// Moving-average window (samples)
    pub window_samples: usize,
    /// Low-pass cutoff (Hz)
    pub cutoff_hz: f64,
    /// Second-derivative magnitude that counts as motion
    pub motion_threshold: f64,
    /// Acceleration magnitude below which a sample is still
    pub zupt_threshold: f64,
    /// Consecutive still samples before ZUPT is applied
    pub zupt_run_samples: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::walking()
    }
}

impl PipelineConfig {
    /// Body-worn IMU at pedestrian pace
    pub fn walking() -> Self {
        Self {
            sampling_rate_hz: filters::DEFAULT_SAMPLING_RATE_HZ,
            window_samples: filters::DEFAULT_WINDOW_SAMPLES,
            cutoff_hz: filters::DEFAULT_CUTOFF_HZ,
            motion_threshold: detection::DEFAULT_MOTION_THRESHOLD,
            zupt_threshold: detection::DEFAULT_ZUPT_THRESHOLD_M_PER_S2,
            zupt_run_samples: detection::DEFAULT_ZUPT_RUN_SAMPLES,
        }
    }

    /// Foot-mounted IMU, faster sampling and stricter stance detection
    pub fn foot_mounted() -> Self {
        Self {
            sampling_rate_hz: filters::FOOT_MOUNTED_SAMPLING_RATE_HZ,
            zupt_threshold: detection::FOOT_MOUNTED_ZUPT_THRESHOLD_M_PER_S2,
            zupt_run_samples: detection::FOOT_MOUNTED_ZUPT_RUN_SAMPLES,
            ..Self::walking()
        }
    }

    /// Handheld device, heavier smoothing against tremor
    pub fn handheld() -> Self {
        Self {
            window_samples: filters::HANDHELD_WINDOW_SAMPLES,
            cutoff_hz: filters::HANDHELD_CUTOFF_HZ,
            ..Self::walking()
        }
    }

    /// Override the sampling rate
    pub fn with_sampling_rate(mut self, hz: f64) -> Self {
        self.sampling_rate_hz = hz;
        self
    }

    /// Override the moving-average window
    pub fn with_window(mut self, samples: usize) -> Self {
        self.window_samples = samples;
        self
    }

    /// Override the low-pass cutoff
    pub fn with_cutoff(mut self, hz: f64) -> Self {
        self.cutoff_hz = hz;
        self
    }

    /// Override the motion threshold
    pub fn with_motion_threshold(mut self, threshold: f64) -> Self {
        self.motion_threshold = threshold;
        self
    }

    /// Override the ZUPT threshold and run length
    pub fn with_zupt(mut self, threshold: f64, run_samples: usize) -> Self {
        self.zupt_threshold = threshold;
        self.zupt_run_samples = run_samples;
        self
    }

    /// Check every parameter before running the chain
    pub fn validate(&self) -> DspResult<()> {
        check_rate(self.sampling_rate_hz)?;
        check_cutoff(self.cutoff_hz)?;
        check_threshold(self.motion_threshold)?;
        check_threshold(self.zupt_threshold)?;

        if self.window_samples == 0 {
            return Err(DspError::InvalidWindow);
        }
        if self.zupt_run_samples == 0 {
            return Err(DspError::InvalidRunLength);
        }
        // Content at or above Nyquist is not represented in the sampled signal
        if self.cutoff_hz >= self.sampling_rate_hz / 2.0 {
            return Err(DspError::InvalidConfig {
                reason: "cutoff must be below the Nyquist frequency",
            });
        }
        Ok(())
    }

    /// Moving-average stage
    pub fn smoother(&self) -> Smoother {
        Smoother::new(self.window_samples)
    }

    /// Low-pass stage
    pub fn low_pass(&self) -> LowPassFilter {
        LowPassFilter::new(self.cutoff_hz, self.sampling_rate_hz)
    }

    /// Motion detection stage
    pub fn motion_detector(&self) -> MotionDetector {
        MotionDetector::new(self.sampling_rate_hz, self.motion_threshold)
    }

    /// ZUPT stage
    pub fn zupt_detector(&self) -> ZuptDetector {
        ZuptDetector::new(self.zupt_threshold, self.zupt_run_samples)
    }
}
