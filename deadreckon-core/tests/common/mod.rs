//! Common test utilities and signal generators for integration tests
//!
//! Generators are deterministic: noise comes from a small LCG seeded per
//! generator, so every run sees the same samples.

#![allow(dead_code)]

use std::f64::consts::PI;

/// Deterministic accelerometer-like signal generator
pub struct SignalGenerator {
    sampling_rate_hz: f64,
    seed: u32,
}

impl SignalGenerator {
    /// Create a generator for `sampling_rate_hz`
    pub fn new(sampling_rate_hz: f64) -> Self {
        Self { sampling_rate_hz, seed: 42 }
    }

    /// Pure sine of `freq_hz` and `amplitude`
    pub fn sine(&self, freq_hz: f64, amplitude: f64, samples: usize) -> Vec<f64> {
        (0..samples)
            .map(|i| amplitude * (2.0 * PI * freq_hz * i as f64 / self.sampling_rate_hz).sin())
            .collect()
    }

    /// Sine plus uniform noise in `[-noise, noise]`
    pub fn noisy_sine(&mut self, freq_hz: f64, amplitude: f64, noise: f64, samples: usize) -> Vec<f64> {
        let clean = self.sine(freq_hz, amplitude, samples);
        clean.into_iter().map(|x| x + self.noise(noise)).collect()
    }

    /// Walking pattern: alternating stance (near zero) and swing (step bursts)
    ///
    /// Returns the samples and the index ranges of each stance phase.
    pub fn gait(
        &mut self,
        steps: usize,
        stance_samples: usize,
        swing_samples: usize,
        swing_peak: f64,
    ) -> (Vec<f64>, Vec<std::ops::Range<usize>>) {
        let mut samples = Vec::with_capacity(steps * (stance_samples + swing_samples));
        let mut stances = Vec::with_capacity(steps);

        for _ in 0..steps {
            let start = samples.len();
            for _ in 0..stance_samples {
                samples.push(self.noise(0.02));
            }
            stances.push(start..samples.len());

            for j in 0..swing_samples {
                let phase = PI * j as f64 / swing_samples as f64;
                samples.push(swing_peak * phase.sin() + self.noise(0.05));
            }
        }

        (samples, stances)
    }

    /// Constant signal
    pub fn constant(value: f64, samples: usize) -> Vec<f64> {
        vec![value; samples]
    }

    fn noise(&mut self, amplitude: f64) -> f64 {
        // Numerical Recipes LCG
        self.seed = self.seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let unit = self.seed as f64 / u32::MAX as f64;
        (unit * 2.0 - 1.0) * amplitude
    }
}

/// Mean absolute difference between neighbouring samples
pub fn roughness(signal: &[f64]) -> f64 {
    if signal.len() < 2 {
        return 0.0;
    }
    let total: f64 = signal.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    total / (signal.len() - 1) as f64
}

/// Assert two slices match element-wise within `tol`
pub fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {}: got {}, expected {} (tol {})",
            i, a, e, tol
        );
    }
}

/// Render rows of cells as comma-separated text
pub fn csv(rows: &[&[f64]]) -> String {
    let mut text = String::new();
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        text.push_str(&cells.join(","));
        text.push('\n');
    }
    text
}
