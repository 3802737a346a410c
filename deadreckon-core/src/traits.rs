//! Core traits for transforms
//!
//! Two shapes cover every transform in the crate: whole-buffer transforms
//! that write a caller-owned output slice, and streaming filters that take
//! one sample at a time. Keep them simple - embedded callers don't need
//! complex abstractions.

use crate::errors::DspResult;

/// Transform over a whole sample sequence
///
/// Implementors borrow `input` immutably and `output` mutably for the call
/// only. On `Err` the output buffer is left exactly as the caller passed it.
pub trait BufferTransform {
    /// Write the transformed `input` into `output` (same length)
    fn apply(&self, input: &[f64], output: &mut [f64]) -> DspResult<()>;

    /// Short name used in logs and plot titles
    fn name(&self) -> &'static str;
}

/// Sample-at-a-time filter with internal state
pub trait SampleFilter {
    /// Push one sample and return the filtered value
    fn push(&mut self, sample: f64) -> f64;

    /// Reset internal state to initial conditions
    fn reset(&mut self);

    /// Run the filter over a slice, writing one output per input
    ///
    /// Stops at the shorter of the two slices.
    fn process(&mut self, input: &[f64], output: &mut [f64]) {
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = self.push(*x);
        }
    }
}
