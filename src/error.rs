//! Error types for every stage of secret recovery.
//!
//! Errors are split by layer so that a caller can tell *where* a request
//! failed:
//!
//! - [`DecodeError`]
//!   A single share value could not be turned into an integer.
//! - [`ReconstructionError`]
//!   The decoded points could not be interpolated.
//! - [`SolveError`]
//!   One problem failed end to end. Wraps either of the above together
//!   with the share it came from.
//! - [`LoadError`]
//!   A problem document could not be read or understood.

use std::path::PathBuf;

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised while decoding a base-encoded share value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The encoded value is the empty string.
    #[error("encoded value is empty")]
    EmptyValue,

    /// The radix lies outside `2..=36`.
    #[error("base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),

    /// A character is not a valid digit in the requested base.
    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    /// The decoded value does not fit in the configured width.
    #[error("decoded value exceeds {max_bits} bits")]
    Overflow { max_bits: u64 },
}

/// Errors raised while interpolating the secret from decoded points.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReconstructionError {
    /// The threshold is zero.
    #[error("threshold must be at least 1")]
    InvalidThreshold,

    /// Fewer usable points than the threshold requires.
    #[error("insufficient points: need {required}, got {available}")]
    InsufficientPoints { required: usize, available: usize },

    /// Two points of the quorum share the same x-coordinate.
    #[error("duplicate x-coordinate {0}")]
    DuplicateXCoordinate(BigInt),

    /// The interpolated constant term is not an integer.
    #[error("interpolation produced the non-integer value {numerator}/{denominator}")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },
}

/// The pipeline stage a [`SolveError`] originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Parsing or decoding one of the shares.
    Decode,
    /// Quorum selection or Lagrange interpolation.
    Interpolation,
}

/// Errors raised while solving a single problem.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The share index is not a positive integer.
    #[error("share '{index}': index is not a positive integer")]
    InvalidIndex { index: String },

    /// The share base is not an integer.
    #[error("share '{index}': base '{base}' is not an integer")]
    MalformedBase { index: String, base: String },

    /// The share value could not be decoded.
    #[error("share '{index}': {source}")]
    Decode {
        index: String,
        #[source]
        source: DecodeError,
    },

    /// The declared share count is smaller than the threshold.
    #[error("not enough shares declared: n = {n} is smaller than k = {k}")]
    InconsistentCounts { n: usize, k: usize },

    /// The decoded points could not be interpolated.
    #[error(transparent)]
    Reconstruction(#[from] ReconstructionError),
}

impl SolveError {
    /// Returns the stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            SolveError::InvalidIndex { .. }
            | SolveError::MalformedBase { .. }
            | SolveError::Decode { .. } => Stage::Decode,
            SolveError::InconsistentCounts { .. } | SolveError::Reconstruction(_) => {
                Stage::Interpolation
            }
        }
    }
}

/// Errors raised while loading a problem document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {message}", .file.display())]
    Io { file: PathBuf, message: String },

    #[error("malformed problem document: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}
