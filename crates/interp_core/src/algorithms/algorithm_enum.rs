//! Algorithm enumeration types.
//!
//! This module provides:
//! - [`AlgorithmKind`]: Identity tokens with stable names and string parsing
//! - [`Algorithm`]: Static dispatch enum wrapping the concrete algorithms

use super::{
    DerivativeInterpolation, HermitePolynomialApproximation, InterpolationAlgorithm,
    LagrangePolynomialApproximation, LinearApproximation,
};
use crate::table::SampleTable;
use crate::types::InterpolationError;
use num_traits::Float;
use std::str::FromStr;

/// Identity of an interpolation algorithm.
///
/// # Example
///
/// ```
/// use interp_core::algorithms::AlgorithmKind;
///
/// let kind: AlgorithmKind = "lagrange".parse().unwrap();
/// assert_eq!(kind, AlgorithmKind::Lagrange);
/// assert_eq!(kind.name(), "Lagrange");
/// assert!("Spline".parse::<AlgorithmKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    /// Two-point linear approximation
    Linear,
    /// Lagrange polynomial approximation
    Lagrange,
    /// Hermite polynomial approximation
    Hermite,
}

impl AlgorithmKind {
    /// Every kind, in a fixed order.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Linear,
        AlgorithmKind::Lagrange,
        AlgorithmKind::Hermite,
    ];

    /// Stable name of the algorithm.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Linear => "Linear",
            AlgorithmKind::Lagrange => "Lagrange",
            AlgorithmKind::Hermite => "Hermite",
        }
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = InterpolationError;

    /// Parse a name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InterpolationError::UnknownAlgorithm(s.to_string()))
    }
}

/// Static dispatch enum wrapping the concrete algorithms.
///
/// Implements [`InterpolationAlgorithm`] for every `T: Float`, so callers can
/// pick an algorithm at runtime without trait objects.
///
/// # Example
///
/// ```
/// use interp_core::algorithms::{Algorithm, InterpolationAlgorithm};
/// use interp_core::table::SampleTable;
///
/// let algorithm: Algorithm = "Lagrange".parse().unwrap();
/// let table = SampleTable::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0], 1).unwrap();
///
/// let y = algorithm.interpolate_order_zero(1.5, &table).unwrap();
/// assert!((y[0] - 2.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Two-point linear approximation
    Linear(LinearApproximation),
    /// Lagrange polynomial approximation
    Lagrange(LagrangePolynomialApproximation),
    /// Hermite polynomial approximation
    Hermite(HermitePolynomialApproximation),
}

impl Algorithm {
    /// Every algorithm, in [`AlgorithmKind::ALL`] order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Linear(LinearApproximation),
        Algorithm::Lagrange(LagrangePolynomialApproximation),
        Algorithm::Hermite(HermitePolynomialApproximation),
    ];

    /// Algorithm for an identity token.
    #[inline]
    pub fn from_kind(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Linear => Algorithm::Linear(LinearApproximation),
            AlgorithmKind::Lagrange => Algorithm::Lagrange(LagrangePolynomialApproximation),
            AlgorithmKind::Hermite => Algorithm::Hermite(HermitePolynomialApproximation),
        }
    }

    /// Whether this algorithm offers the higher-order capability.
    #[inline]
    pub fn supports_derivatives(&self) -> bool {
        InterpolationAlgorithm::<f64>::derivatives(self).is_some()
    }
}

impl From<AlgorithmKind> for Algorithm {
    fn from(kind: AlgorithmKind) -> Self {
        Algorithm::from_kind(kind)
    }
}

impl FromStr for Algorithm {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AlgorithmKind>().map(Algorithm::from_kind)
    }
}

impl<T: Float> InterpolationAlgorithm<T> for Algorithm {
    #[inline]
    fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Linear(a) => InterpolationAlgorithm::<T>::kind(a),
            Algorithm::Lagrange(a) => InterpolationAlgorithm::<T>::kind(a),
            Algorithm::Hermite(a) => InterpolationAlgorithm::<T>::kind(a),
        }
    }

    #[inline]
    fn required_data_points(&self, degree: usize, input_order: usize) -> usize {
        match self {
            Algorithm::Linear(a) => {
                InterpolationAlgorithm::<T>::required_data_points(a, degree, input_order)
            }
            Algorithm::Lagrange(a) => {
                InterpolationAlgorithm::<T>::required_data_points(a, degree, input_order)
            }
            Algorithm::Hermite(a) => {
                InterpolationAlgorithm::<T>::required_data_points(a, degree, input_order)
            }
        }
    }

    fn interpolate_order_zero_into(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        result: &mut [T],
    ) -> Result<(), InterpolationError> {
        match self {
            Algorithm::Linear(a) => a.interpolate_order_zero_into(x, table, result),
            Algorithm::Lagrange(a) => a.interpolate_order_zero_into(x, table, result),
            Algorithm::Hermite(a) => a.interpolate_order_zero_into(x, table, result),
        }
    }

    #[inline]
    fn derivatives(&self) -> Option<&dyn DerivativeInterpolation<T>> {
        match self {
            Algorithm::Linear(a) => a.derivatives(),
            Algorithm::Lagrange(a) => a.derivatives(),
            Algorithm::Hermite(a) => a.derivatives(),
        }
    }
}
