//! Numeric column extraction from comma-separated text
//!
//! ## Format Rules
//!
//! - Cells are separated by `,`. Empty cells are skipped, so consecutive
//!   delimiters collapse and do not advance the column index.
//! - Columns are zero-based.
//! - A row without the target column contributes nothing.
//! - Cells are converted with prefix parsing: leading whitespace is ignored
//!   and the longest numeric prefix is used (`"12.5kg"` reads as `12.5`). A
//!   cell with no numeric prefix reads as `0.0` and is counted in
//!   [`ColumnStats::coerced_to_zero`].
//! - Bytes that are not valid UTF-8 are replaced before parsing, so a cell
//!   such as a Latin-1 `temp°C` header reads as `0.0` instead of failing the
//!   whole column.
//! - Blank lines are skipped, and a trailing delimiter does not open an
//!   extra cell. A C reader built on `strtok`/`atof` differs on both: it
//!   reads a blank line as `0.0` in column 0 and the line ending after a
//!   trailing `,` as a `0.0` cell. Those phantom zeros are not emitted here.
//!
//! ## Example
//!
//! ```rust,no_run
//! use deadreckon_core::io::read_column;
//!
//! let mut samples = vec![0.0; 1024];
//! let count = read_column("walk.csv", &mut samples, 5)?;
//! let samples = &samples[..count];
//! # Ok::<(), deadreckon_core::io::IoError>(())
//! ```

use std::fs::File;
use std::borrow::Cow;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{IoError, IoResult};
use crate::constants::io::{CELL_DELIMITER, MAX_LINE_BYTES};

/// Statistics for one column extraction
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnStats {
    /// Lines read from the source, blank ones included
    pub rows_read: usize,
    /// Values extracted from the target column
    pub values_extracted: usize,
    /// Rows that had no cell at the target column
    pub rows_missing_column: usize,
    /// Target cells that had no numeric prefix
    pub coerced_to_zero: usize,
}

/// Streaming reader for one column of a delimited text source
pub struct ColumnReader<R> {
    reader: R,
    column: usize,
    line: Vec<u8>,
    skip_lines: usize,
    stats: ColumnStats,
}

impl ColumnReader<BufReader<File>> {
    /// Open `path` and read zero-based `column`
    pub fn open<P: AsRef<Path>>(path: P, column: usize) -> IoResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            log_warn!("unable to open {}: {}", path.display(), source);
            IoError::Open {
                path: path.display().to_string(),
                source,
            }
        })?;
        Ok(Self::new(BufReader::new(file), column))
    }
}

impl<R: BufRead> ColumnReader<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R, column: usize) -> Self {
        Self {
            reader,
            column,
            line: Vec::with_capacity(MAX_LINE_BYTES),
            skip_lines: 0,
            stats: ColumnStats::default(),
        }
    }

    /// Skip first N lines (useful for headers)
    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &ColumnStats {
        &self.stats
    }

    /// Next value of the target column, `None` at end of input
    pub fn next_value(&mut self) -> IoResult<Option<f64>> {
        loop {
            self.line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.line)
                .map_err(IoError::Read)?;
            if read == 0 {
                return Ok(None);
            }
            self.stats.rows_read += 1;

            if self.skip_lines > 0 {
                self.skip_lines -= 1;
                continue;
            }

            let text: Cow<'_, str> = String::from_utf8_lossy(&self.line);
            let row = text.trim_end_matches(['\n', '\r']);
            if row.trim().is_empty() {
                continue;
            }

            let cell = row
                .split(CELL_DELIMITER)
                .filter(|cell| !cell.is_empty())
                .nth(self.column);

            match cell {
                Some(cell) => {
                    let (value, numeric) = parse_cell(cell);
                    if !numeric {
                        self.stats.coerced_to_zero += 1;
                    }
                    self.stats.values_extracted += 1;
                    return Ok(Some(value));
                }
                None => self.stats.rows_missing_column += 1,
            }
        }
    }

    /// Fill `out` from the front, returning how many values were written
    ///
    /// Stops at the end of input or when `out` is full.
    pub fn read_into(&mut self, out: &mut [f64]) -> IoResult<usize> {
        let mut count = 0;
        while count < out.len() {
            match self.next_value()? {
                Some(value) => {
                    out[count] = value;
                    count += 1;
                }
                None => break,
            }
        }
        log_debug!(
            "column {}: {} values from {} rows",
            self.column, count, self.stats.rows_read
        );
        Ok(count)
    }
}

impl<R: BufRead> Iterator for ColumnReader<R> {
    type Item = IoResult<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().transpose()
    }
}

/// Read zero-based `column` of `path` into `out`, returning the count
pub fn read_column<P: AsRef<Path>>(path: P, out: &mut [f64], column: usize) -> IoResult<usize> {
    ColumnReader::open(path, column)?.read_into(out)
}

/// Read up to `capacity` values of zero-based `column` of `path`
pub fn read_column_vec<P: AsRef<Path>>(
    path: P,
    column: usize,
    capacity: usize,
) -> IoResult<Vec<f64>> {
    ColumnReader::open(path, column)?
        .take(capacity)
        .collect()
}

/// Parse a cell the way C `atof` does, reporting whether any digits were used
fn parse_cell(cell: &str) -> (f64, bool) {
    let text = cell.trim();
    if let Ok(value) = text.parse::<f64>() {
        return (value, true);
    }

    let prefix_len = text
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    (1..=prefix_len)
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .map(|value| (value, true))
        .unwrap_or((0.0, false))
}
