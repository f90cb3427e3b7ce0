//! Core shared types.
//!
//! This module provides:
//! - `error`: Structured error types for table validation and interpolation calls
//! - `dual`: Dual number type integration with num-dual for automatic differentiation (when `num-dual-mode` feature is enabled)
//!
//! # Re-exports
//!
//! [`InterpolationError`], [`ErrorCategory`] and [`BufferKind`] are re-exported
//! at this module level.

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;

pub use error::{BufferKind, ErrorCategory, InterpolationError};
