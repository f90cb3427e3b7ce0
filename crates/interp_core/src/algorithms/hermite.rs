//! Hermite polynomial approximation.
//!
//! Each sample contributes `input_order + 1` interpolation conditions (its
//! value and the supplied derivative levels). The conditions are folded into a
//! confluent divided-difference table in which every sample appears as
//! `input_order + 1` coincident nodes:
//!
//! ```text
//! z = [x0, x0, ..., x1, x1, ..., x(n-1), ...]
//!
//! f[z_k .. z_{k+l}] = f^(l)(x_i) / l!                          if z_k == z_{k+l} == x_i
//!                   = (f[z_{k+1} .. z_{k+l}] - f[z_k .. z_{k+l-1}])
//!                     / (z_{k+l} - z_k)                         otherwise
//! ```
//!
//! The diagonal of that table gives the Newton-form coefficients, which are
//! evaluated with a nested scheme that carries Taylor coefficients so that
//! derivatives come out analytically.

use super::traits::{check_query, check_result_len};
use super::{AlgorithmKind, DerivativeInterpolation, InterpolationAlgorithm};
use crate::table::{result_len, SampleTable};
use crate::types::InterpolationError;
use num_traits::Float;

/// Hermite polynomial approximation.
///
/// Uses every sample in the table together with all derivative levels the
/// table carries. The resulting polynomial has degree
/// `len * (input_order + 1) - 1`.
///
/// # Example
///
/// ```
/// use interp_core::algorithms::{DerivativeInterpolation, HermitePolynomialApproximation};
/// use interp_core::table::SampleTable;
///
/// // f(x) = x^3 sampled with first derivatives at 0 and 1: (f, f') per sample
/// let xs = [0.0_f64, 1.0];
/// let ys = [0.0, 0.0, 1.0, 3.0];
/// let table = SampleTable::with_derivatives(&xs, &ys, 1, 1).unwrap();
///
/// let y = HermitePolynomialApproximation.interpolate(0.5, &table, 1).unwrap();
/// assert!((y[0] - 0.125).abs() < 1e-12); // f(0.5)
/// assert!((y[1] - 0.75).abs() < 1e-12);  // f'(0.5)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HermitePolynomialApproximation;

impl<T: Float> InterpolationAlgorithm<T> for HermitePolynomialApproximation {
    #[inline]
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Hermite
    }

    /// `max(ceil((degree + 1) / (input_order + 1)), 2)`.
    ///
    /// A degree `d` polynomial needs `d + 1` conditions and each sample
    /// supplies `input_order + 1` of them.
    #[inline]
    fn required_data_points(&self, degree: usize, input_order: usize) -> usize {
        (degree + 1).div_ceil(input_order + 1).max(2)
    }

    /// Value block of the Hermite polynomial.
    ///
    /// Supplied derivative levels are still used to build the polynomial, so
    /// this agrees exactly with [`DerivativeInterpolation::interpolate`] at
    /// `output_order == 0`.
    fn interpolate_order_zero_into(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        result: &mut [T],
    ) -> Result<(), InterpolationError> {
        self.interpolate_into(x, table, 0, result)
    }

    #[inline]
    fn derivatives(&self) -> Option<&dyn DerivativeInterpolation<T>> {
        Some(self)
    }
}

impl<T: Float> DerivativeInterpolation<T> for HermitePolynomialApproximation {
    /// # Errors
    ///
    /// * `BufferLength` - wrong result length
    /// * `NonFiniteInput` - `x` is NaN or infinite
    fn interpolate_into(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        output_order: usize,
        result: &mut [T],
    ) -> Result<(), InterpolationError> {
        let stride = table.stride();
        check_result_len(result, result_len(stride, output_order))?;
        check_query(x)?;

        let factorials = factorials::<T>(table.input_order().max(output_order));
        let nodes = table.len() * (table.input_order() + 1);
        let mut coefficients = vec![T::zero(); nodes];
        let mut taylor = vec![T::zero(); output_order + 1];

        for channel in 0..stride {
            newton_coefficients(table, channel, &factorials, &mut coefficients);
            evaluate_newton(x, table, &coefficients, &mut taylor);

            for (level, &t) in taylor.iter().enumerate() {
                result[level * stride + channel] = t * factorials[level];
            }
        }
        Ok(())
    }
}

/// `[0!, 1!, ..., max!]`.
fn factorials<T: Float>(max: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(max + 1);
    let mut factorial = T::one();
    let mut k = T::zero();
    out.push(factorial);
    for _ in 0..max {
        k = k + T::one();
        factorial = factorial * k;
        out.push(factorial);
    }
    out
}

/// Confluent divided differences for one channel, in place.
///
/// On return `coefficients[l]` is `f[z_0 .. z_l]`.
fn newton_coefficients<T: Float>(
    table: &SampleTable<'_, T>,
    channel: usize,
    factorials: &[T],
    coefficients: &mut [T],
) {
    let multiplicity = table.input_order() + 1;
    let sample_of = |k: usize| k / multiplicity;

    for (k, c) in coefficients.iter_mut().enumerate() {
        *c = table.value(sample_of(k), channel);
    }

    for level in 1..coefficients.len() {
        for k in (level..coefficients.len()).rev() {
            let (hi, lo) = (sample_of(k), sample_of(k - level));
            coefficients[k] = if hi == lo {
                // Coincident nodes never span more than `input_order` levels
                table.level(hi, level, channel) / factorials[level]
            } else {
                (coefficients[k] - coefficients[k - 1]) / (table.x(hi) - table.x(lo))
            };
        }
    }
}

/// Evaluate the Newton-form polynomial at `x`.
///
/// On return `taylor[d]` is `p^(d)(x) / d!`.
fn evaluate_newton<T: Float>(
    x: T,
    table: &SampleTable<'_, T>,
    coefficients: &[T],
    taylor: &mut [T],
) {
    let multiplicity = table.input_order() + 1;
    let last = coefficients.len() - 1;

    taylor.fill(T::zero());
    taylor[0] = coefficients[last];
    for k in (0..last).rev() {
        let a = x - table.x(k / multiplicity);
        for d in (1..taylor.len()).rev() {
            taylor[d] = taylor[d] * a + taylor[d - 1];
        }
        taylor[0] = taylor[0] * a + coefficients[k];
    }
}
