//! Zero Velocity Update (ZUPT) detection
//!
//! ## Overview
//!
//! Integrating acceleration into velocity accumulates drift. While the sensor
//! is at rest the true velocity is zero, so forcing the estimate to zero
//! during detected stationary intervals bounds that drift.
//!
//! ## Detection Rule
//!
//! A sample is *still* when `|a[i]| < threshold`. The detector scans forward
//! with a run counter:
//!
//! ```text
//!            still                          not still
//!   ┌──────────────────────┐        ┌─────────────────────────┐
//!   │ Reset ──► Accumulating(1) ──► Accumulating(n+1)         │
//!   │   ▲                                        │            │
//!   │   └──────────── not still ─────────────────┘            │
//!   └─────────────────────────────────────────────────────────┘
//!   Accumulating(n) with n >= run_samples  ──►  stationary, stop
//! ```
//!
//! - Every still sample zeroes `velocity[i]`, whether or not its run is
//!   eventually confirmed.
//! - A non-still sample resets the counter and leaves `velocity[i]` alone;
//!   normal velocity integration is the caller's business.
//! - The scan stops at the first confirmation. Samples after it are not
//!   inspected and their velocity is not touched.
//!
//! ## Outcomes
//!
//! The result is three-valued: `Ok(Stationary { .. })`, `Ok(NotStationary)`,
//! or `Err(_)` when the input could not be evaluated. [`zupt_status`] maps
//! these to the integer codes `1`, `0` and `-1`.
//!
//! ```rust
//! use deadreckon_core::zupt::{apply_zupt, ZuptOutcome};
//!
//! let accel = [0.01, 0.01, 0.01];
//! let mut velocity = [0.4, 0.5, 0.6];
//!
//! let outcome = apply_zupt(&accel, &mut velocity, 0.1, 3)?;
//! assert_eq!(outcome, ZuptOutcome::Stationary { confirmed_at: 2 });
//! assert_eq!(velocity, [0.0, 0.0, 0.0]);
//! # Ok::<(), deadreckon_core::DspError>(())
//! ```

use libm::fabs;

use crate::{
    constants::detection::{ZUPT_STATUS_INVALID, ZUPT_STATUS_NOT_STATIONARY, ZUPT_STATUS_STATIONARY},
    errors::{check_pair, check_threshold, DspError, DspResult},
};

/// Result of a completed ZUPT scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZuptOutcome {
    /// A run of still samples reached the run-length threshold
    Stationary {
        /// Index of the sample that completed the run
        confirmed_at: usize,
    },
    /// The whole buffer was scanned without a qualifying run
    NotStationary,
}

impl ZuptOutcome {
    /// Legacy integer status: `1` stationary, `0` not stationary
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Stationary { .. } => ZUPT_STATUS_STATIONARY,
            Self::NotStationary => ZUPT_STATUS_NOT_STATIONARY,
        }
    }

    /// Check if a stationary interval was confirmed
    pub fn is_stationary(&self) -> bool {
        matches!(self, Self::Stationary { .. })
    }
}

/// Integer status for a ZUPT result, `-1` when it could not be evaluated
pub fn zupt_status(result: &DspResult<ZuptOutcome>) -> i32 {
    match result {
        Ok(outcome) => outcome.status_code(),
        Err(_) => ZUPT_STATUS_INVALID,
    }
}

/// Run-length state of the stationary detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZuptState {
    /// Last sample was not still (or nothing seen yet)
    #[default]
    Reset,
    /// Length of the current run of still samples
    Accumulating(usize),
}

impl ZuptState {
    /// Advance on one sample
    ///
    /// The counter resets only on a non-still sample.
    pub fn step(self, still: bool) -> Self {
        match (self, still) {
            (_, false) => Self::Reset,
            (Self::Reset, true) => Self::Accumulating(1),
            (Self::Accumulating(n), true) => Self::Accumulating(n.saturating_add(1)),
        }
    }

    /// Current run length
    pub fn run_length(&self) -> usize {
        match self {
            Self::Reset => 0,
            Self::Accumulating(n) => *n,
        }
    }
}

fn check_run_length(run_samples: usize) -> DspResult<()> {
    if run_samples == 0 {
        Err(DspError::InvalidRunLength)
    } else {
        Ok(())
    }
}

/// Scan `accel` for a stationary interval, zeroing `velocity` on still samples
///
/// `accel` and `velocity` must have the same non-zero length, `threshold`
/// must be positive and `run_samples` at least 1. A `run_samples` longer than
/// the data simply never confirms. On error `velocity` is not modified.
pub fn apply_zupt(
    accel: &[f64],
    velocity: &mut [f64],
    threshold: f64,
    run_samples: usize,
) -> DspResult<ZuptOutcome> {
    check_pair(accel.len(), velocity.len())?;
    check_threshold(threshold)?;
    check_run_length(run_samples)?;

    let mut state = ZuptState::Reset;
    for (i, (&a, v)) in accel.iter().zip(velocity.iter_mut()).enumerate() {
        let still = fabs(a) < threshold;
        state = state.step(still);

        if still {
            *v = 0.0;
            if state.run_length() >= run_samples {
                log_debug!("zupt confirmed at sample {} after {} still samples", i, run_samples);
                return Ok(ZuptOutcome::Stationary { confirmed_at: i });
            }
        }
    }

    Ok(ZuptOutcome::NotStationary)
}

/// Whole-buffer ZUPT detector configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZuptDetector {
    /// Acceleration magnitude below which a sample is still
    pub threshold: f64,
    /// Consecutive still samples needed to confirm
    pub run_samples: usize,
}

impl ZuptDetector {
    /// Create a detector
    pub fn new(threshold: f64, run_samples: usize) -> Self {
        Self { threshold, run_samples }
    }

    /// Scan and correct `velocity`, see [`apply_zupt`]
    pub fn detect(&self, accel: &[f64], velocity: &mut [f64]) -> DspResult<ZuptOutcome> {
        apply_zupt(accel, velocity, self.threshold, self.run_samples)
    }

    /// Streaming tracker with this configuration
    pub fn tracker(&self) -> DspResult<ZuptTracker> {
        ZuptTracker::new(self.threshold, self.run_samples)
    }
}

impl Default for ZuptDetector {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_ZUPT_THRESHOLD_M_PER_S2,
            crate::constants::DEFAULT_ZUPT_RUN_SAMPLES,
        )
    }
}

/// Sample-at-a-time ZUPT detector with the run counter kept across calls
///
/// Unlike [`apply_zupt`] it never stops: once confirmed, the interval stays
/// confirmed until a non-still sample arrives.
#[derive(Debug, Clone)]
pub struct ZuptTracker {
    threshold: f64,
    run_samples: usize,
    state: ZuptState,
    confirmations: u32,
}

impl ZuptTracker {
    /// Create a tracker
    pub fn new(threshold: f64, run_samples: usize) -> DspResult<Self> {
        check_threshold(threshold)?;
        check_run_length(run_samples)?;
        Ok(Self {
            threshold,
            run_samples,
            state: ZuptState::Reset,
            confirmations: 0,
        })
    }

    /// Feed one acceleration sample and return the new state
    pub fn update(&mut self, accel: f64) -> ZuptState {
        let still = fabs(accel) < self.threshold;
        self.state = self.state.step(still);

        if self.state.run_length() == self.run_samples {
            self.confirmations = self.confirmations.saturating_add(1);
        }
        self.state
    }

    /// Feed one sample and zero `velocity` if it is still
    ///
    /// Returns whether the current run is confirmed.
    pub fn correct(&mut self, accel: f64, velocity: &mut f64) -> bool {
        if let ZuptState::Accumulating(_) = self.update(accel) {
            *velocity = 0.0;
        }
        self.is_confirmed()
    }

    /// Check if the current run has reached the threshold
    pub fn is_confirmed(&self) -> bool {
        self.state.run_length() >= self.run_samples
    }

    /// Current state
    pub fn state(&self) -> ZuptState {
        self.state
    }

    /// Number of stationary intervals confirmed since creation or reset
    pub fn confirmations(&self) -> u32 {
        self.confirmations
    }

    /// Forget the current run and the confirmation count
    pub fn reset(&mut self) {
        self.state = ZuptState::Reset;
        self.confirmations = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirms_quiet_buffer() {
        let accel = [0.01, 0.01, 0.01];
        let mut velocity = [1.0, 2.0, 3.0];
        let result = apply_zupt(&accel, &mut velocity, 0.1, 3);
        assert_eq!(result, Ok(ZuptOutcome::Stationary { confirmed_at: 2 }));
        assert_eq!(zupt_status(&result), 1);
        assert_eq!(velocity, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn stops_at_first_confirmation() {
        let accel = [0.0, 0.0, 0.0, 0.0];
        let mut velocity = [1.0; 4];
        let outcome = apply_zupt(&accel, &mut velocity, 0.1, 2).unwrap();
        assert_eq!(outcome, ZuptOutcome::Stationary { confirmed_at: 1 });
        // Samples after the confirmation are not touched
        assert_eq!(velocity, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn broken_runs_reset_the_counter() {
        let accel = [0.0, 0.0, 5.0, 0.0, 0.0, -5.0, 0.0];
        let mut velocity = [1.0; 7];
        let result = apply_zupt(&accel, &mut velocity, 0.1, 3);
        assert_eq!(result, Ok(ZuptOutcome::NotStationary));
        assert_eq!(zupt_status(&result), 0);
        // Still samples of unconfirmed runs are zeroed, moving ones kept
        assert_eq!(velocity, [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn threshold_is_strict() {
        let accel = [0.1, -0.1];
        let mut velocity = [1.0, 1.0];
        let outcome = apply_zupt(&accel, &mut velocity, 0.1, 1).unwrap();
        assert_eq!(outcome, ZuptOutcome::NotStationary);
        assert_eq!(velocity, [1.0, 1.0]);
    }

    #[test]
    fn run_longer_than_data_never_confirms() {
        let accel = [0.0; 4];
        let mut velocity = [1.0; 4];
        let outcome = apply_zupt(&accel, &mut velocity, 0.1, 10).unwrap();
        assert_eq!(outcome, ZuptOutcome::NotStationary);
        assert_eq!(velocity, [0.0; 4]);
    }

    #[test]
    fn invalid_input_is_reported_without_writes() {
        let mut empty: [f64; 0] = [];
        let result = apply_zupt(&[], &mut empty, 0.1, 3);
        assert_eq!(result, Err(DspError::EmptyInput));
        assert_eq!(zupt_status(&result), -1);

        let mut velocity = [1.0; 2];
        assert!(apply_zupt(&[0.0; 3], &mut velocity, 0.1, 1).is_err());
        assert!(apply_zupt(&[0.0; 2], &mut velocity, 0.0, 1).is_err());
        assert_eq!(
            apply_zupt(&[0.0; 2], &mut velocity, 0.1, 0),
            Err(DspError::InvalidRunLength)
        );
        assert_eq!(velocity, [1.0; 2]);
    }

    #[test]
    fn state_machine_transitions() {
        let s = ZuptState::default();
        assert_eq!(s.run_length(), 0);
        let s = s.step(true).step(true);
        assert_eq!(s, ZuptState::Accumulating(2));
        assert_eq!(s.step(false), ZuptState::Reset);
    }

    #[test]
    fn tracker_keeps_state_across_calls() {
        let mut tracker = ZuptDetector::new(0.1, 3).tracker().unwrap();
        let mut velocity = 2.0;

        assert!(!tracker.correct(0.0, &mut velocity));
        assert_eq!(velocity, 0.0);
        velocity = 2.0;
        assert!(!tracker.correct(1.0, &mut velocity));
        assert_eq!(velocity, 2.0);

        for _ in 0..2 {
            assert!(!tracker.correct(0.0, &mut velocity));
        }
        assert!(tracker.correct(0.0, &mut velocity));
        assert!(tracker.correct(0.0, &mut velocity));
        assert_eq!(tracker.confirmations(), 1);

        tracker.update(3.0);
        assert!(!tracker.is_confirmed());
        for _ in 0..3 {
            tracker.update(0.0);
        }
        assert_eq!(tracker.confirmations(), 2);

        tracker.reset();
        assert_eq!(tracker.state(), ZuptState::Reset);
        assert_eq!(tracker.confirmations(), 0);
    }

    #[test]
    fn tracker_rejects_bad_configuration() {
        assert!(ZuptTracker::new(-1.0, 3).is_err());
        assert!(ZuptTracker::new(0.1, 0).is_err());
    }
}
