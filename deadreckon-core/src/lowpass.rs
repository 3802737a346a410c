//! First-order low-pass filtering
//!
//! Single-pole RC filter, the first-order Butterworth response:
//!
//! ```text
//! dt = 1 / fs
//! RC = 1 / (2π · fc)
//! α  = dt / (RC + dt)
//!
//! y[0] = x[0]
//! y[i] = α · x[i] + (1 - α) · y[i-1]
//! ```
//!
//! The recurrence is an IIR filter: every output depends on the previous
//! one, so the batch transform runs strictly in index order.
//!
//! The same recurrence with a fixed `α` is exposed as in-place exponential
//! smoothing ([`smooth_in_place`]), which overwrites its input rather than
//! writing a separate output buffer.

use crate::{
    constants::filters::{DEFAULT_SMOOTHING_ALPHA, MAX_SMOOTHING_ALPHA, MIN_SMOOTHING_ALPHA, TWO_PI},
    errors::{check_cutoff, check_pair, check_rate, DspError, DspResult},
    traits::{BufferTransform, SampleFilter},
};

/// Smoothing factor of the single-pole filter for `cutoff_hz` at `sampling_rate_hz`
pub fn lowpass_alpha(cutoff_hz: f64, sampling_rate_hz: f64) -> DspResult<f64> {
    check_cutoff(cutoff_hz)?;
    check_rate(sampling_rate_hz)?;

    let dt = 1.0 / sampling_rate_hz;
    let rc = 1.0 / (TWO_PI * cutoff_hz);
    Ok(dt / (rc + dt))
}

/// Low-pass filter `input` into `output`
///
/// `output[0]` is seeded with `input[0]`. On error nothing is written.
pub fn low_pass(
    input: &[f64],
    output: &mut [f64],
    cutoff_hz: f64,
    sampling_rate_hz: f64,
) -> DspResult<()> {
    check_pair(input.len(), output.len())?;
    let alpha = lowpass_alpha(cutoff_hz, sampling_rate_hz).map_err(|e| {
        log_warn!("low-pass rejected: {}", e);
        e
    })?;

    output[0] = input[0];
    for i in 1..input.len() {
        output[i] = alpha * input[i] + (1.0 - alpha) * output[i - 1];
    }

    Ok(())
}

/// Exponentially smooth `data` in place with the fixed factor `α = 0.1`
///
/// `data[0]` is the seed; every later sample becomes
/// `α · data[i] + (1 - α) · data[i-1]`, where `data[i-1]` has already been
/// smoothed.
pub fn smooth_in_place(data: &mut [f64]) -> DspResult<()> {
    smooth_in_place_with_alpha(data, DEFAULT_SMOOTHING_ALPHA)
}

/// Exponentially smooth `data` in place with a caller-chosen factor in (0, 1]
pub fn smooth_in_place_with_alpha(data: &mut [f64], alpha: f64) -> DspResult<()> {
    check_alpha(alpha)?;
    if data.is_empty() {
        return Err(DspError::EmptyInput);
    }

    for i in 1..data.len() {
        data[i] = alpha * data[i] + (1.0 - alpha) * data[i - 1];
    }

    Ok(())
}

fn check_alpha(alpha: f64) -> DspResult<()> {
    if alpha.is_finite() && alpha > MIN_SMOOTHING_ALPHA && alpha <= MAX_SMOOTHING_ALPHA {
        Ok(())
    } else {
        Err(DspError::InvalidAlpha { value: alpha })
    }
}

/// Whole-buffer single-pole low-pass filter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LowPassFilter {
    /// Cutoff frequency in Hz
    pub cutoff_hz: f64,
    /// Sampling rate of the input in Hz
    pub sampling_rate_hz: f64,
}

impl LowPassFilter {
    /// Create a filter for `cutoff_hz` at `sampling_rate_hz`
    pub fn new(cutoff_hz: f64, sampling_rate_hz: f64) -> Self {
        Self { cutoff_hz, sampling_rate_hz }
    }

    /// Smoothing factor for this configuration
    pub fn alpha(&self) -> DspResult<f64> {
        lowpass_alpha(self.cutoff_hz, self.sampling_rate_hz)
    }

    /// Streaming filter with the same response
    pub fn streaming(&self) -> DspResult<OnePoleLowPass> {
        self.alpha().map(OnePoleLowPass::with_alpha)
    }
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_CUTOFF_HZ,
            crate::constants::DEFAULT_SAMPLING_RATE_HZ,
        )
    }
}

impl BufferTransform for LowPassFilter {
    fn apply(&self, input: &[f64], output: &mut [f64]) -> DspResult<()> {
        low_pass(input, output, self.cutoff_hz, self.sampling_rate_hz)
    }

    fn name(&self) -> &'static str {
        "low-pass"
    }
}

/// Streaming single-pole low-pass filter
///
/// The first pushed sample passes through and seeds the state.
#[derive(Debug, Clone)]
pub struct OnePoleLowPass {
    alpha: f64,
    y: f64,
    initialized: bool,
}

impl OnePoleLowPass {
    /// Build from cutoff and sampling rate
    pub fn new(cutoff_hz: f64, sampling_rate_hz: f64) -> DspResult<Self> {
        lowpass_alpha(cutoff_hz, sampling_rate_hz).map(Self::with_alpha)
    }

    fn with_alpha(alpha: f64) -> Self {
        Self { alpha, y: 0.0, initialized: false }
    }

    /// Smoothing factor in use
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl SampleFilter for OnePoleLowPass {
    fn push(&mut self, sample: f64) -> f64 {
        if !sample.is_finite() {
            return self.y;
        }
        if !self.initialized {
            self.y = sample;
            self.initialized = true;
        } else {
            self.y = self.alpha * sample + (1.0 - self.alpha) * self.y;
        }
        self.y
    }

    fn reset(&mut self) {
        self.y = 0.0;
        self.initialized = false;
    }
}

/// Exponential moving average with constant `alpha` in (0, 1]
#[derive(Debug, Clone)]
pub struct ExponentialSmoother {
    alpha: f64,
    y: f64,
    initialized: bool,
}

impl ExponentialSmoother {
    /// Create a smoother with a validated factor
    pub fn new(alpha: f64) -> DspResult<Self> {
        check_alpha(alpha)?;
        Ok(Self { alpha, y: 0.0, initialized: false })
    }

    /// Update the smoothing factor
    pub fn set_alpha(&mut self, alpha: f64) -> DspResult<()> {
        check_alpha(alpha)?;
        self.alpha = alpha;
        Ok(())
    }
}

impl Default for ExponentialSmoother {
    fn default() -> Self {
        Self { alpha: DEFAULT_SMOOTHING_ALPHA, y: 0.0, initialized: false }
    }
}

impl SampleFilter for ExponentialSmoother {
    fn push(&mut self, sample: f64) -> f64 {
        if !sample.is_finite() {
            return self.y;
        }
        if !self.initialized {
            self.y = sample;
            self.initialized = true;
            return self.y;
        }
        self.y = self.alpha * sample + (1.0 - self.alpha) * self.y;
        self.y
    }

    fn reset(&mut self) {
        self.y = 0.0;
        self.initialized = false;
    }
}
