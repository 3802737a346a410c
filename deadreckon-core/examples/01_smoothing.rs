//! Smoothing Example
//!
//! Compares the three smoothing transforms on a noisy accelerometer trace.
//!
//! ## What You'll Learn
//!
//! - Running whole-buffer transforms into caller-owned output slices
//! - Choosing a low-pass cutoff for a given sampling rate
//! - Using the streaming filters when samples arrive one at a time
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_smoothing
//! ```

use deadreckon_core::{
    constants::filters::STREAMING_WINDOW_CAPACITY, low_pass, moving_average, smooth_in_place,
    DspError, MovingAverage, OnePoleLowPass, SampleFilter,
};

const RATE_HZ: f64 = 50.0;

fn main() -> Result<(), DspError> {
    println!("deadreckon Smoothing Example");
    println!("============================\n");

    // 1 Hz body sway with a cheap deterministic jitter on top
    let raw: Vec<f64> = (0..40)
        .map(|i| {
            let t = i as f64 / RATE_HZ;
            let jitter = if i % 3 == 0 { 0.15 } else { -0.08 };
            (2.0 * std::f64::consts::PI * t).sin() + jitter
        })
        .collect();

    let mut averaged = vec![0.0; raw.len()];
    moving_average(&raw, &mut averaged, 5)?;

    let mut filtered = vec![0.0; raw.len()];
    low_pass(&raw, &mut filtered, 3.0, RATE_HZ)?;

    let mut exponential = raw.clone();
    smooth_in_place(&mut exponential)?;

    println!("{:>4} {:>9} {:>9} {:>9} {:>9}", "i", "raw", "avg(5)", "lp(3Hz)", "ema(0.1)");
    for i in (0..raw.len()).step_by(4) {
        println!(
            "{:>4} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
            i, raw[i], averaged[i], filtered[i], exponential[i]
        );
    }

    // Streaming versions take one sample at a time
    println!("\nStreaming, window of {} samples:", STREAMING_WINDOW_CAPACITY);
    let mut average = MovingAverage::<STREAMING_WINDOW_CAPACITY>::new();
    let mut one_pole = OnePoleLowPass::new(3.0, RATE_HZ)?;
    for (i, &x) in raw.iter().enumerate() {
        let avg = average.push(x);
        let lp = one_pole.push(x);
        if i + 5 >= raw.len() {
            println!("  sample {:>2}: avg {:>8.4}  lp {:>8.4} (batch {:.4})", i, avg, lp, filtered[i]);
        }
    }

    // Invalid parameters are reported, never silently ignored
    println!("\nRejected calls:");
    let mut out = vec![0.0; raw.len()];
    if let Err(e) = moving_average(&raw, &mut out, 0) {
        println!("  window 0   -> {}", e);
    }
    if let Err(e) = low_pass(&raw, &mut out, -1.0, RATE_HZ) {
        println!("  cutoff -1  -> {}", e);
    }

    Ok(())
}
