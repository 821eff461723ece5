//! Error type shared by every stage of the pipeline.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which component of a pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors produced while building, correlating or persisting grade-pair data.
#[derive(Debug, Error)]
pub enum GradeVizError {
    /// A pair has a coordinate outside the 0..=5 grade domain.
    #[error("pair #{index} ({x}, {y}) is outside the 0..=5 grade range")]
    OutOfRangeIndex { index: usize, x: i32, y: i32 },

    /// The operation has no meaning for zero pairs.
    #[error("{operation} is undefined for an empty dataset")]
    EmptyDataset { operation: &'static str },

    /// Every value on one axis is identical, so r has a zero denominator.
    #[error("correlation is undefined: all {axis} values are identical")]
    ZeroVariance { axis: Axis },

    /// Two datasets in one run share a name, so their outputs would collide.
    #[error("dataset name \"{name}\" is used more than once")]
    DuplicateDataset { name: String },

    /// Pair data could not be decoded.
    #[error("invalid pair data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading pair data or writing a rendered surface failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GradeVizError
pub type Result<T> = std::result::Result<T, GradeVizError>;
