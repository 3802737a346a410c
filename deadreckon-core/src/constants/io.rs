//! I/O Constants
//!
//! Limits for the tabular column source and formatting for plot sinks.

/// Default maximum number of values extracted from one column.
pub const DEFAULT_COLUMN_CAPACITY: usize = 100_000;

/// Initial capacity of the column reader's line buffer (bytes).
///
/// Longer lines are accepted; the buffer grows as needed.
pub const MAX_LINE_BYTES: usize = 1024;

/// Cell separator for tabular sources.
pub const CELL_DELIMITER: char = ',';

/// Decimal places written for plot triples.
pub const PLOT_PRECISION: usize = 6;

/// Default multiplot grid (rows, columns) for the script sink.
pub const DEFAULT_PLOT_LAYOUT: (usize, usize) = (2, 3);
