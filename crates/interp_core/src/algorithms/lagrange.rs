//! Lagrange polynomial approximation.

use super::traits::{check_query, check_result_len};
use super::{AlgorithmKind, DerivativeInterpolation, InterpolationAlgorithm};
use crate::table::{result_len, SampleTable};
use crate::types::InterpolationError;
use num_traits::Float;

/// Lagrange polynomial approximation over every sample in the table.
///
/// The caller passes exactly the window it wants interpolated, normally
/// `required_data_points(degree, 0) == degree + 1` samples around `x`.
///
/// Sensitive to closely spaced samples; coincident ones are rejected when the
/// [`SampleTable`] is built.
///
/// # Example
///
/// ```
/// use interp_core::algorithms::{InterpolationAlgorithm, LagrangePolynomialApproximation};
/// use interp_core::table::SampleTable;
///
/// // Samples of x^2
/// let table = SampleTable::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0], 1).unwrap();
/// let y = LagrangePolynomialApproximation
///     .interpolate_order_zero(1.5, &table)
///     .unwrap();
/// assert!((y[0] - 2.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LagrangePolynomialApproximation;

impl<T: Float> InterpolationAlgorithm<T> for LagrangePolynomialApproximation {
    #[inline]
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Lagrange
    }

    /// `degree + 1`; supplied derivative levels are not used.
    #[inline]
    fn required_data_points(&self, degree: usize, _input_order: usize) -> usize {
        degree + 1
    }

    /// Basis-weighted sum over the value level of every sample:
    ///
    /// ```text
    /// w_i = prod_{j != i} (x - x_j) / (x_i - x_j)
    /// y   = sum_i w_i * y_i        (per channel)
    /// ```
    fn interpolate_order_zero_into(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        result: &mut [T],
    ) -> Result<(), InterpolationError> {
        check_result_len(result, table.stride())?;
        check_query(x)?;

        accumulate_values(x, table, result);
        Ok(())
    }

    #[inline]
    fn derivatives(&self) -> Option<&dyn DerivativeInterpolation<T>> {
        Some(self)
    }
}

impl<T: Float> DerivativeInterpolation<T> for LagrangePolynomialApproximation {
    /// Values plus analytic derivatives of the interpolating polynomial.
    ///
    /// Each basis numerator `prod_{j != i} (x + h - x_j)` is expanded as a
    /// Taylor series in `h` truncated at `output_order`, so derivative `d` of
    /// basis `i` is `d! * [h^d] / prod_{j != i} (x_i - x_j)`.
    ///
    /// Like order zero, only the value level of each sample is read.
    ///
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

        let (values, higher) = result.split_at_mut(stride);
        accumulate_values(x, table, values);
        if output_order == 0 {
            return Ok(());
        }

        higher.fill(T::zero());
        let mut taylor = vec![T::zero(); output_order + 1];
        for i in 0..table.len() {
            let xi = table.x(i);
            taylor.fill(T::zero());
            taylor[0] = T::one();
            let mut denominator = T::one();

            for j in (0..table.len()).filter(|&j| j != i) {
                let xj = table.x(j);
                let a = x - xj;
                for d in (1..=output_order).rev() {
                    taylor[d] = taylor[d] * a + taylor[d - 1];
                }
                taylor[0] = taylor[0] * a;
                denominator = denominator * (xi - xj);
            }

            let mut factorial = T::one();
            let mut level = T::zero();
            for d in 1..=output_order {
                level = level + T::one();
                factorial = factorial * level;
                let weight = taylor[d] * factorial / denominator;

                let block = &mut higher[(d - 1) * stride..d * stride];
                for (out, &y) in block.iter_mut().zip(table.value_block(i)) {
                    *out = *out + weight * y;
                }
            }
        }
        Ok(())
    }
}

/// Write the basis-weighted sum of value blocks into `values`.
fn accumulate_values<T: Float>(x: T, table: &SampleTable<'_, T>, values: &mut [T]) {
    values.fill(T::zero());
    for i in 0..table.len() {
        let weight = basis_weight(x, table, i);
        for (out, &y) in values.iter_mut().zip(table.value_block(i)) {
            *out = *out + weight * y;
        }
    }
}

/// Lagrange basis polynomial `i` evaluated at `x`.
#[inline]
fn basis_weight<T: Float>(x: T, table: &SampleTable<'_, T>, i: usize) -> T {
    let xi = table.x(i);
    (0..table.len())
        .filter(|&j| j != i)
        .map(|j| table.x(j))
        .fold(T::one(), |w, xj| w * (x - xj) / (xi - xj))
}
