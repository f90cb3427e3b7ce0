//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from sample table construction and interpolation calls
//! - `ErrorCategory`: Coarse classification of those errors (shape, numeric, configuration)
//! - `BufferKind`: Which flat buffer a length mismatch refers to

use std::fmt;
use thiserror::Error;

/// Flat buffer named in a [`InterpolationError::BufferLength`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BufferKind {
    /// The dependent-variable table (`ys`).
    YTable,
    /// The result buffer written by an interpolation call.
    Result,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferKind::YTable => write!(f, "y table"),
            BufferKind::Result => write!(f, "result buffer"),
        }
    }
}

/// Broad category of an [`InterpolationError`].
///
/// Callers that switch algorithms on failure usually only care whether the
/// input was malformed or numerically degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed input: wrong lengths, ordering, sample counts.
    Shape,
    /// Zero or near-zero denominators.
    Numeric,
    /// Unknown algorithm names and similar selection errors.
    Configuration,
}

/// Interpolation errors.
///
/// Every variant is reported before any output is written.
///
/// # Variants
/// - `InsufficientData`: Fewer samples than the algorithm needs
/// - `TooManySamples`: More samples than the algorithm consumes
/// - `BufferLength`: A flat buffer has the wrong length for its stride
/// - `InvalidStride`: Stride of zero
/// - `NonMonotonicData`: Independent variable values decrease
/// - `NonFiniteInput`: NaN or infinite independent variable / query point
/// - `LayoutOverflow`: Sample count, stride and input order overflow `usize`
/// - `DegenerateSpacing`: Coincident independent variable values
/// - `UnknownAlgorithm`: Algorithm name not recognised
///
/// # Examples
/// ```
/// use interp_core::types::{ErrorCategory, InterpolationError};
///
/// let err = InterpolationError::DegenerateSpacing { index: 1, x: 1.0 };
/// assert_eq!(err.category(), ErrorCategory::Numeric);
/// assert!(format!("{}", err).contains("coincide"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// More data points than the algorithm uses.
    #[error("Too many data points: got {got}, algorithm uses at most {max}")]
    TooManySamples {
        /// Number of points provided
        got: usize,
        /// Maximum number of points accepted
        max: usize,
    },

    /// Flat buffer length does not match the table shape.
    #[error("{buffer} length mismatch: expected {expected}, got {got}")]
    BufferLength {
        /// Which buffer is malformed
        buffer: BufferKind,
        /// Length implied by sample count, stride and orders
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Stride must be at least one channel.
    #[error("Invalid stride: must be at least 1")]
    InvalidStride,

    /// Independent variable values are not strictly increasing.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Non-finite independent variable or query value.
    #[error("Non-finite input: {0}")]
    NonFiniteInput(String),

    /// Table dimensions too large to address.
    #[error("Table layout overflows: {samples} samples x {stride} channels x input order {input_order}")]
    LayoutOverflow {
        /// Number of samples
        samples: usize,
        /// Channels per level
        stride: usize,
        /// Derivative levels per sample
        input_order: usize,
    },

    /// Neighbouring independent variable values coincide.
    #[error("Independent variable values coincide at index {index} (x = {x})")]
    DegenerateSpacing {
        /// Index of the second of the two coincident samples
        index: usize,
        /// The coincident value
        x: f64,
    },

    /// Algorithm name not recognised.
    #[error("Unknown interpolation algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl InterpolationError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            InterpolationError::DegenerateSpacing { .. } => ErrorCategory::Numeric,
            InterpolationError::UnknownAlgorithm(_) => ErrorCategory::Configuration,
            _ => ErrorCategory::Shape,
        }
    }

    /// True for malformed-input errors.
    #[inline]
    pub fn is_shape_violation(&self) -> bool {
        self.category() == ErrorCategory::Shape
    }

    /// True for numeric degeneracies.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.category() == ErrorCategory::Numeric
    }
}
