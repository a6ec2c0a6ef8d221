// src/errors.rs

use std::fmt;
use std::error::Error;

/// Represents errors that can occur while building or comparing crack model curves.
///
/// Out-of-range physical parameters are not errors; they produce undefined
/// numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The stress history contains no samples.
    EmptyStressHistory,
    /// Two sequences that must be indexed against each other differ in length.
    LengthMismatch { expected: usize, found: usize },
    /// A parameter range cannot produce any values (e.g. non-positive step).
    InvalidRange(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::EmptyStressHistory => write!(f, "Stress history must contain at least one sample"),
            ModelError::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {} samples, found {}", expected, found)
            }
            ModelError::InvalidRange(msg) => write!(f, "Invalid parameter range: {}", msg),
        }
    }
}

impl Error for ModelError {}
