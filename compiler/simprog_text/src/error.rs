//! Errors produced while flushing a [`LineBuffer`](crate::LineBuffer).

use std::io;

/// A sink failure during [`LineBuffer::flush`](crate::LineBuffer::flush).
///
/// Flushing stops at the first failure. Lines written before it stay in the
/// sink; nothing is retried or rolled back.
#[derive(Debug, thiserror::Error)]
pub enum FlushError {
    /// Writing the line at index `line` failed.
    #[error("failed to write line {line} to sink: {source}")]
    Write {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// All lines were written but flushing the sink itself failed.
    #[error("failed to flush sink: {source}")]
    Flush {
        #[source]
        source: io::Error,
    },
}

impl FlushError {
    /// The underlying sink error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            FlushError::Write { source, .. } | FlushError::Flush { source } => source,
        }
    }

    /// Index of the line that failed, if the failure happened mid-write.
    pub fn line(&self) -> Option<usize> {
        match self {
            FlushError::Write { line, .. } => Some(*line),
            FlushError::Flush { .. } => None,
        }
    }

    /// Unwrap into the sink's error, unchanged.
    pub fn into_io_error(self) -> io::Error {
        match self {
            FlushError::Write { source, .. } | FlushError::Flush { source } => source,
        }
    }
}

impl From<FlushError> for io::Error {
    fn from(err: FlushError) -> Self {
        err.into_io_error()
    }
}
