//! Tabular sources and plot sinks
//!
//! The transforms never do I/O themselves. This module holds the two
//! collaborators around them:
//! - `column` - extract one numeric column from comma-separated text
//! - `plot` - hand `(index, input, output)` triples to a visualization sink
//!
//! Both require `std`.

use thiserror_no_std::Error;

use crate::errors::DspError;

pub mod column;
pub mod plot;

pub use column::{read_column, read_column_vec, ColumnReader, ColumnStats};
pub use plot::{plot_channel, GnuplotScript, PlotSink, TripletWriter};

/// Errors from tabular sources and plot sinks
#[derive(Error, Debug)]
pub enum IoError {
    /// Source file could not be opened
    #[error("Unable to open {path}: {source}")]
    Open {
        /// Path that was requested
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading from an open source failed
    #[error("Read error: {0}")]
    Read(std::io::Error),

    /// Writing to a sink failed
    #[error("Write error: {0}")]
    Write(std::io::Error),

    /// A transform rejected the data
    #[error("Processing error: {0}")]
    Dsp(#[from] DspError),
}

/// Result type for I/O collaborators
pub type IoResult<T> = Result<T, IoError>;
