//! Error type for reading data and driving the predictor.

use thiserror::Error;

/// Everything that can go wrong outside the pure prediction rules.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing records or weights.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A sequence has no interior position with a full window.
    #[error("sequence of length {len} is shorter than the {min} padding residues")]
    SequenceTooShort { len: usize, min: usize },

    /// A record line carries a byte that is not a structure label.
    #[error("unknown structure label {found:?} on line {line}")]
    UnknownLabel { line: usize, found: char },

    /// A weight file does not hold one value per coefficient.
    #[error("expected {expected} weights, found {found}")]
    WeightCount { found: usize, expected: usize },

    /// A weight file line is not a finite number.
    #[error("invalid weight {value:?} on line {line}")]
    InvalidWeight { line: usize, value: String },

    /// Sequences and ground truth labels do not pair up.
    #[error("{sequences} sequences but {truths} structure records")]
    LengthMismatch { sequences: usize, truths: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
