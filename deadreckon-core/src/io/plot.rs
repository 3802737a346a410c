//! Visualization sinks
//!
//! A sink receives one channel at a time as `(index, input, output)` triples
//! and renders or stores them. The channel is one-way: nothing a sink does
//! feeds back into the signal chain.
//!
//! Two sinks are provided:
//! - [`TripletWriter`] writes whitespace-separated `index input output` rows,
//!   one channel block after another, to any writer.
//! - [`GnuplotScript`] writes each channel's triples to its own data file
//!   and emits a multiplot script overlaying input and output. The script
//!   can be piped into `gnuplot -persistent`; the sink never spawns it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{IoError, IoResult};
use crate::{
    constants::io::{DEFAULT_PLOT_LAYOUT, PLOT_PRECISION},
    errors::check_pair,
};

/// Receiver for per-channel plot data
pub trait PlotSink {
    /// Start a new channel with a display title
    fn begin_channel(&mut self, title: &str) -> IoResult<()>;

    /// Add one point to the current channel
    fn push(&mut self, index: usize, input: f64, output: f64) -> IoResult<()>;

    /// Finish the current channel
    fn end_channel(&mut self) -> IoResult<()>;
}

/// Send a whole channel to `sink`, returning the number of points
pub fn plot_channel<S: PlotSink + ?Sized>(
    sink: &mut S,
    title: &str,
    input: &[f64],
    output: &[f64],
) -> IoResult<usize> {
    check_pair(input.len(), output.len())?;

    sink.begin_channel(title)?;
    for (i, (&x, &y)) in input.iter().zip(output).enumerate() {
        sink.push(i, x, y)?;
    }
    sink.end_channel()?;
    Ok(input.len())
}

/// Plain-text triple writer
pub struct TripletWriter<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> TripletWriter<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out, precision: PLOT_PRECISION }
    }

    /// Number of decimals written for values
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Flush and return the inner writer
    pub fn into_inner(mut self) -> IoResult<W> {
        self.out.flush().map_err(IoError::Write)?;
        Ok(self.out)
    }
}

impl<W: Write> PlotSink for TripletWriter<W> {
    fn begin_channel(&mut self, title: &str) -> IoResult<()> {
        writeln!(self.out, "# {}", title).map_err(IoError::Write)
    }

    fn push(&mut self, index: usize, input: f64, output: f64) -> IoResult<()> {
        let p = self.precision;
        writeln!(self.out, "{} {:.*} {:.*}", index, p, input, p, output).map_err(IoError::Write)
    }

    fn end_channel(&mut self) -> IoResult<()> {
        // Blank line separates data blocks
        writeln!(self.out).map_err(IoError::Write)
    }
}

/// Multiplot script sink backed by one data file per channel
pub struct GnuplotScript<W: Write> {
    script: W,
    data_dir: PathBuf,
    layout: (usize, usize),
    title: String,
    started: bool,
    channels: usize,
    current: Option<(String, PathBuf, TripletWriter<BufWriter<File>>)>,
}

impl<W: Write> GnuplotScript<W> {
    /// Write the script to `script` and data files into `data_dir`
    pub fn new<P: AsRef<Path>>(script: W, data_dir: P, title: &str) -> Self {
        Self {
            script,
            data_dir: data_dir.as_ref().to_path_buf(),
            layout: DEFAULT_PLOT_LAYOUT,
            title: title.to_string(),
            started: false,
            channels: 0,
            current: None,
        }
    }

    /// Multiplot grid as (rows, columns)
    pub fn with_layout(mut self, rows: usize, cols: usize) -> Self {
        self.layout = (rows.max(1), cols.max(1));
        self
    }

    /// Number of channels completed so far
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Close the multiplot and return the script writer
    pub fn finish(mut self) -> IoResult<W> {
        if self.current.is_some() {
            self.end_channel()?;
        }
        if self.started {
            writeln!(self.script, "unset multiplot").map_err(IoError::Write)?;
        }
        self.script.flush().map_err(IoError::Write)?;
        Ok(self.script)
    }

    fn data_path(&self, title: &str) -> PathBuf {
        let slug: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        self.data_dir.join(format!("{:02}_{}.dat", self.channels, slug))
    }
}

impl<W: Write> PlotSink for GnuplotScript<W> {
    fn begin_channel(&mut self, title: &str) -> IoResult<()> {
        if self.current.is_some() {
            self.end_channel()?;
        }
        if !self.started {
            let (rows, cols) = self.layout;
            writeln!(
                self.script,
                "set multiplot layout {},{} title '{}'",
                rows, cols, quote(&self.title)
            )
            .map_err(IoError::Write)?;
            self.started = true;
        }

        let path = self.data_path(title);
        let file = File::create(&path).map_err(IoError::Write)?;
        self.current = Some((title.to_string(), path, TripletWriter::new(BufWriter::new(file))));
        Ok(())
    }

    fn push(&mut self, index: usize, input: f64, output: f64) -> IoResult<()> {
        match self.current.as_mut() {
            Some((_, _, data)) => data.push(index, input, output),
            // Points outside a channel have nowhere to go
            None => Ok(()),
        }
    }

    fn end_channel(&mut self) -> IoResult<()> {
        let Some((title, path, data)) = self.current.take() else {
            return Ok(());
        };
        data.into_inner()?;

        let file = quote(&path.display().to_string());
        writeln!(self.script, "set title '{}'", quote(&title)).map_err(IoError::Write)?;
        writeln!(
            self.script,
            "plot '{}' using 1:2 with lines title 'Input', '{}' using 1:3 with lines title 'Output'",
            file, file
        )
        .map_err(IoError::Write)?;
        self.channels += 1;
        Ok(())
    }
}

/// Escape text for a single-quoted gnuplot string
fn quote(text: &str) -> String {
    text.replace('\'', "''")
}
