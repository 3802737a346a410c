//! Causal moving-average smoothing
//!
//! `output[i]` is the mean of `input[i]` and up to `window - 1` samples before
//! it. The window is truncated at the start of the sequence: index `i`
//! averages `min(i + 1, window)` samples. There is no look-ahead, wraparound
//! or zero padding, so the first outputs are averages over fewer samples.
//!
//! ```text
//! input   1    2    3    4    5      window = 3
//! output  1   1.5   2    3    4
//!         ^    ^
//!         |    └── mean(1, 2)
//!         └── mean(1)
//! ```
//!
//! Every output sums its own window from scratch, oldest sample first, so a
//! large sample only affects the outputs whose window contains it. The cost
//! is O(n · window).

use crate::{
    buffer::SampleWindow,
    errors::{check_pair, DspError, DspResult},
    traits::{BufferTransform, SampleFilter},
};

/// Causal moving average of `input` into `output`
///
/// Both slices must have the same non-zero length and `window` must be at
/// least 1. A window longer than the data degrades to a cumulative mean.
/// On error nothing is written.
pub fn moving_average(input: &[f64], output: &mut [f64], window: usize) -> DspResult<()> {
    check_pair(input.len(), output.len())?;
    if window == 0 {
        log_warn!("moving average rejected: zero window");
        return Err(DspError::InvalidWindow);
    }

    for (i, out) in output.iter_mut().enumerate() {
        let start = (i + 1).saturating_sub(window);
        let span = &input[start..=i];
        *out = span.iter().sum::<f64>() / span.len() as f64;
    }

    Ok(())
}

/// Whole-buffer moving-average smoother
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Smoother {
    /// Trailing window length in samples
    pub window_samples: usize,
}

impl Smoother {
    /// Create a smoother over `window_samples` samples
    pub fn new(window_samples: usize) -> Self {
        Self { window_samples }
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_WINDOW_SAMPLES)
    }
}

impl BufferTransform for Smoother {
    fn apply(&self, input: &[f64], output: &mut [f64]) -> DspResult<()> {
        moving_average(input, output, self.window_samples)
    }

    fn name(&self) -> &'static str {
        "moving-average"
    }
}

/// Streaming moving average over a fixed window of `N` samples
///
/// Same truncated-start policy as [`moving_average`]: until `N` samples have
/// been pushed, the output is the mean of everything seen so far. The mean
/// is recomputed from the held samples on every push, so a spike stops
/// affecting the output once it has been evicted.
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize> {
    window: SampleWindow<N>,
}

impl<const N: usize> MovingAverage<N> {
    /// Create an empty moving average
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
        }
    }

    /// Current average without pushing a sample
    ///
    /// Returns `None` before the first sample.
    pub fn average(&self) -> Option<f64> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.window.sum() / self.window.len() as f64)
        }
    }

    /// Number of samples currently averaged
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no sample has been pushed since the last reset
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleFilter for MovingAverage<N> {
    fn push(&mut self, sample: f64) -> f64 {
        if !sample.is_finite() {
            // Drop invalid inputs; return current average
            return self.average().unwrap_or(0.0);
        }

        self.window.push(sample);
        self.window.sum() / self.window.len() as f64
    }

    fn reset(&mut self) {
        self.window.clear();
    }
}
