//! Zero-Velocity Update Example
//!
//! Integrates a foot-mounted accelerometer trace into velocity and shows how
//! ZUPT removes the drift that builds up between steps.
//!
//! ## What You'll Learn
//!
//! - Scanning a buffer with `apply_zupt` and reading its outcome
//! - Mapping outcomes to the 1 / 0 / -1 status codes
//! - Tracking stance phases sample by sample with `ZuptTracker`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_zupt_correction
//! ```

use deadreckon_core::{
    apply_zupt, zupt_status, DspError, PipelineConfig, ZuptOutcome, ZuptState, ZuptTracker,
};

fn main() -> Result<(), DspError> {
    println!("deadreckon ZUPT Example");
    println!("=======================\n");

    let config = PipelineConfig::foot_mounted();
    let dt = 1.0 / config.sampling_rate_hz;

    // Three steps: a short swing burst followed by a stance with sensor bias
    let mut accel = Vec::new();
    for _ in 0..3 {
        accel.extend((0..20).map(|j| 2.5 * (std::f64::consts::PI * j as f64 / 20.0).sin()));
        accel.extend(std::iter::repeat(0.05).take(25));
    }

    // Naive integration drifts because of the bias
    let mut velocity: Vec<f64> = accel
        .iter()
        .scan(0.0, |v, &a| {
            *v += a * dt;
            Some(*v)
        })
        .collect();
    println!("Velocity before correction: {:.3} m/s at the end", velocity[velocity.len() - 1]);

    let result = apply_zupt(
        &accel,
        &mut velocity,
        config.zupt_threshold,
        config.zupt_run_samples,
    );
    match result {
        Ok(ZuptOutcome::Stationary { confirmed_at }) => {
            println!("Stationary interval confirmed at sample {}", confirmed_at)
        }
        Ok(ZuptOutcome::NotStationary) => println!("No stationary interval found"),
        Err(e) => println!("ZUPT rejected: {}", e),
    }
    println!("Status code: {}\n", zupt_status(&result));

    // The tracker keeps going through every stance
    let mut tracker = ZuptTracker::new(config.zupt_threshold, config.zupt_run_samples)?;
    let mut v = 0.0;
    let mut previous = ZuptState::Reset;
    for (i, &a) in accel.iter().enumerate() {
        v += a * dt;
        let confirmed = tracker.correct(a, &mut v);
        if confirmed && previous.run_length() < config.zupt_run_samples {
            println!("  stance confirmed at sample {:>3}, velocity reset", i);
        }
        previous = tracker.state();
    }
    println!("Stances confirmed: {}", tracker.confirmations());
    println!("Velocity after correction: {:.3} m/s at the end", v);

    // Bad parameters map to -1
    let mut scratch = vec![0.0; accel.len()];
    println!("\nThreshold 0 -> status {}", zupt_status(&apply_zupt(&accel, &mut scratch, 0.0, 10)));

    Ok(())
}
