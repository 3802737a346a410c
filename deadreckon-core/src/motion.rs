//! Second-derivative motion detection
//!
//! Treats the input as a position-like signal and estimates acceleration with
//! the central second difference:
//!
//! ```text
//! a[i] = (x[i+1] - 2·x[i] + x[i-1]) / dt²      1 <= i <= n-2
//! a[0] = a[n-1] = 0
//! ```
//!
//! The two boundary samples have no neighbour on one side, so they are fixed
//! to zero before thresholding and always classify as still. A sample is
//! flagged as moving (`1.0`) when `|a[i]| > threshold`, otherwise `0.0`.

use libm::fabs;

use crate::{
    constants::detection::{MIN_MOTION_SAMPLES, MOTION_FLAG, STILL_FLAG},
    errors::{check_pair, check_rate, check_threshold, DspError, DspResult},
    traits::BufferTransform,
};

fn check_motion_input(input: usize, output: usize) -> DspResult<()> {
    check_pair(input, output)?;
    if input < MIN_MOTION_SAMPLES {
        return Err(DspError::InsufficientData {
            required: MIN_MOTION_SAMPLES,
            available: input,
        });
    }
    Ok(())
}

/// Central second difference of `input`, boundaries set to zero
///
/// Needs at least three samples. On error nothing is written.
pub fn second_derivative(
    input: &[f64],
    output: &mut [f64],
    sampling_rate_hz: f64,
) -> DspResult<()> {
    check_motion_input(input.len(), output.len())?;
    check_rate(sampling_rate_hz)?;

    let dt = 1.0 / sampling_rate_hz;
    let dt2 = dt * dt;
    let last = input.len() - 1;

    output[0] = 0.0;
    output[last] = 0.0;
    for i in 1..last {
        output[i] = (input[i + 1] - 2.0 * input[i] + input[i - 1]) / dt2;
    }

    Ok(())
}

/// Flag samples whose second derivative exceeds `threshold` in magnitude
///
/// `output` receives `1.0` for moving samples and `0.0` otherwise; the first
/// and last samples are always `0.0`. On error nothing is written.
pub fn detect_movement(
    input: &[f64],
    output: &mut [f64],
    sampling_rate_hz: f64,
    threshold: f64,
) -> DspResult<()> {
    check_threshold(threshold).map_err(|e| {
        log_warn!("movement detection rejected: {}", e);
        e
    })?;
    second_derivative(input, output, sampling_rate_hz)?;

    for value in output.iter_mut() {
        *value = if fabs(*value) > threshold { MOTION_FLAG } else { STILL_FLAG };
    }

    Ok(())
}

/// Number of samples flagged as moving
pub fn count_motion(flags: &[f64]) -> usize {
    flags.iter().filter(|&&f| f == MOTION_FLAG).count()
}

/// Whole-buffer motion detector
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionDetector {
    /// Sampling rate of the position-like input in Hz
    pub sampling_rate_hz: f64,
    /// Acceleration magnitude above which a sample counts as moving
    pub threshold: f64,
}

impl MotionDetector {
    /// Create a detector
    pub fn new(sampling_rate_hz: f64, threshold: f64) -> Self {
        Self { sampling_rate_hz, threshold }
    }
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_SAMPLING_RATE_HZ,
            crate::constants::DEFAULT_MOTION_THRESHOLD,
        )
    }
}

impl BufferTransform for MotionDetector {
    fn apply(&self, input: &[f64], output: &mut [f64]) -> DspResult<()> {
        detect_movement(input, output, self.sampling_rate_hz, self.threshold)
    }

    fn name(&self) -> &'static str {
        "motion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spike_is_flagged() {
        let input = [0.0, 0.0, 10.0, 0.0, 0.0];
        let mut output = [0.0; 5];
        detect_movement(&input, &mut output, 1.0, 5.0).unwrap();
        assert_eq!(output, [0.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn second_derivative_values() {
        let input = [0.0, 0.0, 10.0, 0.0, 0.0];
        let mut accel = [1.0; 5];
        second_derivative(&input, &mut accel, 1.0).unwrap();
        assert_eq!(accel, [0.0, 10.0, -20.0, 10.0, 0.0]);
    }

    #[test]
    fn second_derivative_scales_with_rate() {
        // x = t² sampled at 10 Hz has constant acceleration 2
        let input: heapless::Vec<f64, 8> =
            (0..8).map(|i| { let t = i as f64 * 0.1; t * t }).collect();
        let mut accel = [0.0; 8];
        second_derivative(&input, &mut accel, 10.0).unwrap();
        for a in &accel[1..7] {
            assert!((a - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn boundaries_are_never_moving() {
        let input = [100.0, -100.0, 100.0, -100.0];
        let mut output = [0.0; 4];
        detect_movement(&input, &mut output, 50.0, 1e-6).unwrap();
        assert_eq!(output[0], 0.0);
        assert_eq!(output[3], 0.0);
        assert_eq!(count_motion(&output), 2);
    }

    #[test]
    fn linear_motion_has_no_acceleration() {
        let input = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let mut output = [0.0; 6];
        detect_movement(&input, &mut output, 1.0, 0.1).unwrap();
        assert_eq!(count_motion(&output), 0);
    }

    #[test]
    fn too_short_or_bad_rate_is_rejected() {
        let mut output = [7.0; 2];
        assert_eq!(
            detect_movement(&[0.0, 1.0], &mut output, 1.0, 1.0),
            Err(DspError::InsufficientData { required: 3, available: 2 })
        );
        assert_eq!(output, [7.0; 2]);

        let mut output = [7.0; 3];
        assert!(detect_movement(&[0.0, 1.0, 0.0], &mut output, 0.0, 1.0).is_err());
        assert!(detect_movement(&[0.0, 1.0, 0.0], &mut output, 1.0, -1.0).is_err());
        assert_eq!(output, [7.0; 3]);
    }
}
