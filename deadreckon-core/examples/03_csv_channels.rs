//! CSV Channels Example
//!
//! Reads accelerometer columns 5 to 10 from a CSV log, runs the full signal
//! chain on each and writes a gnuplot multiplot comparing raw and smoothed
//! data.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_csv_channels -- walk.csv
//! gnuplot -persistent < "$TMPDIR/deadreckon/channels.gp"
//! ```
//!
//! Without an argument a synthetic log is generated first.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use deadreckon_core::{
    constants::DEFAULT_COLUMN_CAPACITY,
    io::{GnuplotScript, IoError},
    PipelineConfig, SignalChain,
};

fn main() -> Result<(), IoError> {
    println!("deadreckon CSV Channels Example");
    println!("===============================\n");

    let out_dir = std::env::temp_dir().join("deadreckon");
    fs::create_dir_all(&out_dir).map_err(IoError::Write)?;

    let source = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => synthetic_log(&out_dir)?,
    };
    println!("Source: {}", source.display());

    let chain = SignalChain::new(PipelineConfig::walking())?;
    let script_path = out_dir.join("channels.gp");
    let script = BufWriter::new(File::create(&script_path).map_err(IoError::Write)?);
    let mut sink = GnuplotScript::new(script, &out_dir, "Raw vs Smoothed");

    let reports = chain.run_columns(&source, 5..=10, DEFAULT_COLUMN_CAPACITY, &mut sink)?;
    sink.finish()?;

    println!("\n{:>6} {:>8} {:>8} {:>6}", "column", "samples", "moving", "zupt");
    for (column, report) in &reports {
        println!(
            "{:>6} {:>8} {:>8} {:>6}",
            column,
            report.smoothed.len(),
            report.motion_samples,
            report.zupt.status_code()
        );
    }
    println!("\nPlot script: {}", script_path.display());

    Ok(())
}

/// Six accelerometer-like channels after five bookkeeping columns
fn synthetic_log(dir: &Path) -> Result<PathBuf, IoError> {
    let path = dir.join("synthetic.csv");
    let mut out = BufWriter::new(File::create(&path).map_err(IoError::Write)?);

    for i in 0..300 {
        let t = i as f64 / 50.0;
        let step = if i % 50 < 20 { (std::f64::consts::PI * (i % 50) as f64 / 20.0).sin() } else { 0.0 };
        write!(out, "{},{},0,0,0", i, t).map_err(IoError::Write)?;
        for channel in 0..6 {
            let gain = 1.0 + channel as f64 * 0.5;
            let wobble = 0.05 * ((i * (channel + 3)) as f64 * 0.7).sin();
            write!(out, ",{:.4}", gain * step + wobble).map_err(IoError::Write)?;
        }
        writeln!(out).map_err(IoError::Write)?;
    }
    out.flush().map_err(IoError::Write)?;

    Ok(path)
}
