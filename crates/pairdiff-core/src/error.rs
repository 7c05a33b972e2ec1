//! Error types for the pairdiff crate.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Errors that can occur while reading input or computing a metric.
#[derive(Debug, thiserror::Error)]
pub enum PairDiffError {
    /// The input source could not be opened.
    #[error("cannot open input {}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened input failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),

    /// A line could not be parsed into a pair of integers.
    #[error("malformed input on line {line} ({content:?}): {reason}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        content: String,
        reason: MalformedReason,
    },

    /// The metric does not fit in 64 bits.
    #[error("{metric} overflowed 64-bit arithmetic")]
    Overflow { metric: &'static str },

    /// A configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl PairDiffError {
    /// Returns `true` for failures to open or read the input.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::OpenInput { .. } | Self::Io(_))
    }

    /// Returns `true` when a line could not be parsed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Why a single line was rejected.
#[derive(Debug, thiserror::Error)]
pub enum MalformedReason {
    #[error("expected two values, found one")]
    MissingRightValue,

    #[error("unexpected extra token {0:?}")]
    UnexpectedToken(String),

    #[error("invalid integer {token:?}: {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PairDiffError>;
