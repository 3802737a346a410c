//! Straight-line signal chain for one sensor channel
//!
//! ```text
//!            ┌──────────────┐      ┌────────────────┐
//! samples ──►│ moving avg   │─────►│ motion (d²/dt²)│──► motion flags
//!    │       └──────────────┘      └────────────────┘
//!    │       ┌──────────────┐      ┌────────────────┐
//!    └──────►│ low-pass     │─────►│ integrate + ZUPT│─► velocity, outcome
//!            └──────────────┘      └────────────────┘
//! ```
//!
//! The chain owns no state between channels. Each call allocates its own
//! output vectors; the transforms underneath still only write the slices
//! they are handed.

use std::ops::RangeInclusive;
use std::path::Path;

use crate::{
    config::PipelineConfig,
    errors::{DspError, DspResult},
    io::{plot_channel, read_column_vec, IoResult, PlotSink},
    motion::count_motion,
    traits::BufferTransform,
    zupt::ZuptOutcome,
};

/// Everything the chain produced for one channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelReport {
    /// Moving-average output
    pub smoothed: Vec<f64>,
    /// Low-pass output
    pub filtered: Vec<f64>,
    /// Motion flags on the smoothed signal, `None` below three samples
    pub motion: Option<Vec<f64>>,
    /// Number of samples flagged as moving
    pub motion_samples: usize,
    /// Result of the stationary scan
    pub zupt: ZuptOutcome,
    /// Velocity after zero-velocity correction
    pub velocity: Vec<f64>,
}

/// Signal chain configured once, run per channel
#[derive(Debug, Clone)]
pub struct SignalChain {
    config: PipelineConfig,
}

impl SignalChain {
    /// Validate `config` and build the chain
    pub fn new(config: PipelineConfig) -> DspResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage over `samples`
    ///
    /// Velocity is integrated from the low-pass output unless the caller
    /// supplies an estimate of the same length in `velocity`.
    pub fn process(&self, samples: &[f64], velocity: Option<Vec<f64>>) -> DspResult<ChannelReport> {
        let n = samples.len();
        if n == 0 {
            return Err(DspError::EmptyInput);
        }

        let mut smoothed = vec![0.0; n];
        self.config.smoother().apply(samples, &mut smoothed)?;

        let mut filtered = vec![0.0; n];
        self.config.low_pass().apply(samples, &mut filtered)?;

        let mut flags = vec![0.0; n];
        let motion = match self.config.motion_detector().apply(&smoothed, &mut flags) {
            Ok(()) => Some(flags),
            Err(DspError::InsufficientData { available, .. }) => {
                log_debug!("motion stage skipped: {} samples", available);
                None
            }
            Err(e) => return Err(e),
        };
        let motion_samples = motion.as_deref().map(count_motion).unwrap_or(0);

        let mut velocity = match velocity {
            Some(v) => v,
            None => integrate(&filtered, self.config.sampling_rate_hz),
        };
        let zupt = self.config.zupt_detector().detect(&filtered, &mut velocity)?;

        log_debug!(
            "chain: {} samples, {} moving, zupt {:?}",
            n, motion_samples, zupt
        );

        Ok(ChannelReport {
            smoothed,
            filtered,
            motion,
            motion_samples,
            zupt,
            velocity,
        })
    }

    /// Run the chain over a range of columns of a CSV source
    ///
    /// Columns that cannot be read or are empty are skipped with a warning.
    /// Each processed column is sent to `sink` as raw input against the
    /// smoothed output; sink failures are logged and do not stop the run.
    pub fn run_columns<P: AsRef<Path>>(
        &self,
        path: P,
        columns: RangeInclusive<usize>,
        capacity: usize,
        sink: &mut dyn PlotSink,
    ) -> IoResult<Vec<(usize, ChannelReport)>> {
        let path = path.as_ref();
        let mut reports = Vec::new();

        for column in columns {
            let samples = match read_column_vec(path, column, capacity) {
                Ok(samples) if !samples.is_empty() => samples,
                Ok(_) => {
                    log_warn!("column {} of {} is empty", column, path.display());
                    continue;
                }
                Err(e) => {
                    log_warn!("failed to read column {}: {}", column, e);
                    continue;
                }
            };

            let report = self.process(&samples, None)?;

            let title = format!("Column {}", column);
            if let Err(e) = plot_channel(sink, &title, &samples, &report.smoothed) {
                log_warn!("plot sink failed for {}: {}", title, e);
            }
            reports.push((column, report));
        }

        Ok(reports)
    }
}

/// Forward-Euler integration of acceleration into velocity, starting at rest
fn integrate(accel: &[f64], sampling_rate_hz: f64) -> Vec<f64> {
    let dt = 1.0 / sampling_rate_hz;
    accel
        .iter()
        .scan(0.0, |v, &a| {
            *v += a * dt;
            Some(*v)
        })
        .collect()
}
