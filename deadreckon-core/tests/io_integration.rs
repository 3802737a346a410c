//! File-backed tests for column extraction, plot sinks and the signal chain

mod common;

use std::fs;
use std::io::Write;

use deadreckon_core::{
    io::{read_column, read_column_vec, ColumnReader, GnuplotScript, IoError, TripletWriter},
    PipelineConfig, SignalChain, ZuptOutcome,
};
use tempfile::NamedTempFile;

use common::{csv, SignalGenerator};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn read_column_from_file() {
    let file = write_temp(&csv(&[&[0.0, 1.5, 9.0], &[1.0, 2.5, 9.0], &[2.0, 3.5, 9.0]]));

    let mut out = [0.0; 10];
    let count = read_column(file.path(), &mut out, 1).unwrap();

    assert_eq!(count, 3);
    assert_eq!(&out[..3], &[1.5, 2.5, 3.5]);
    assert!(out[3..].iter().all(|&v| v == 0.0));
}

#[test]
fn read_column_stops_at_capacity() {
    let rows: Vec<Vec<f64>> = (0..50).map(|i| vec![i as f64]).collect();
    let refs: Vec<&[f64]> = rows.iter().map(|r| r.as_slice()).collect();
    let file = write_temp(&csv(&refs));

    let values = read_column_vec(file.path(), 0, 10).unwrap();
    assert_eq!(values, (0..10).map(|i| i as f64).collect::<Vec<_>>());
}

#[test]
fn header_rows_are_skipped_or_coerced() {
    let file = write_temp("ax,ay,az\n0.1,0.2,0.3\n0.4,0.5,0.6\n");

    // Without skipping, the header cell has no numeric prefix
    let values = read_column_vec(file.path(), 2, 100).unwrap();
    assert_eq!(values, vec![0.0, 0.3, 0.6]);

    let mut reader = ColumnReader::open(file.path(), 2).unwrap().with_skip_lines(1);
    let mut out = [0.0; 4];
    assert_eq!(reader.read_into(&mut out).unwrap(), 2);
    assert_eq!(reader.stats().coerced_to_zero, 0);
    assert_eq!(reader.stats().rows_read, 3);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    match read_column_vec(&path, 0, 10) {
        Err(IoError::Open { path: reported, .. }) => assert!(reported.ends_with("absent.csv")),
        other => panic!("expected open error, got {:?}", other),
    }
}

#[test]
fn chain_runs_csv_channels_into_triplets() {
    let mut generator = SignalGenerator::new(50.0);
    let (gait, _) = generator.gait(2, 30, 20, 3.0);
    let noise = generator.noisy_sine(1.0, 0.5, 0.1, gait.len());

    // Columns 0-4 are padding, 5 and 6 carry signals
    let rows: Vec<Vec<f64>> = gait
        .iter()
        .zip(&noise)
        .enumerate()
        .map(|(i, (&g, &n))| vec![i as f64, 1.0, 1.0, 1.0, 1.0, g, n])
        .collect();
    let refs: Vec<&[f64]> = rows.iter().map(|r| r.as_slice()).collect();
    let file = write_temp(&csv(&refs));

    let chain = SignalChain::new(PipelineConfig::walking()).unwrap();
    let mut sink = TripletWriter::new(Vec::new());
    let reports = chain.run_columns(file.path(), 5..=7, 1000, &mut sink).unwrap();

    // Column 7 does not exist and is skipped
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].0, 5);
    assert_eq!(reports[1].0, 6);

    let gait_report = &reports[0].1;
    assert_eq!(gait_report.smoothed.len(), gait.len());
    assert!(gait_report.motion_samples > 0);
    assert!(gait_report.zupt.is_stationary());

    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert!(text.starts_with("# Column 5\n0 "));
    assert!(text.contains("# Column 6\n"));
    assert_eq!(text.lines().count(), 2 * (gait.len() + 2));
}

#[test]
fn chain_unreadable_source_yields_nothing() {
    let chain = SignalChain::new(PipelineConfig::default()).unwrap();
    let mut sink = TripletWriter::new(Vec::new());
    let reports = chain
        .run_columns("/no/such/dir/walk.csv", 0..=3, 100, &mut sink)
        .unwrap();

    assert!(reports.is_empty());
    assert!(sink.into_inner().unwrap().is_empty());
}

#[test]
fn gnuplot_sink_writes_multiplot() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_temp(&csv(&[&[0.0, 0.0], &[1.0, 0.0], &[2.0, 0.0], &[3.0, 0.0]]));

    let chain = SignalChain::new(PipelineConfig::default().with_zupt(0.1, 2)).unwrap();
    let mut sink = GnuplotScript::new(Vec::new(), dir.path(), "Accelerometer");
    let reports = chain.run_columns(file.path(), 0..=1, 100, &mut sink).unwrap();
    assert_eq!(reports[1].1.zupt, ZuptOutcome::Stationary { confirmed_at: 1 });
    assert_eq!(sink.channels(), 2);

    let script = String::from_utf8(sink.finish().unwrap()).unwrap();
    assert!(script.starts_with("set multiplot layout 2,3 title 'Accelerometer'"));
    assert_eq!(script.matches("plot '").count(), 2);

    let data = fs::read_to_string(dir.path().join("01_column_1.dat")).unwrap();
    assert_eq!(data.lines().count(), 4);
}

#[test]
fn config_round_trips_through_json() {
    let config = PipelineConfig::foot_mounted().with_window(7);
    let json = serde_json::to_string(&config).unwrap();
    let back: PipelineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    // Missing fields fall back to the walking preset
    let partial: PipelineConfig = serde_json::from_str(r#"{ "cutoff_hz": 2.0 }"#).unwrap();
    assert_eq!(partial, PipelineConfig::walking().with_cutoff(2.0));
}
