//! Interpolation algorithm contract.

use super::AlgorithmKind;
use crate::table::{result_len, SampleTable};
use crate::types::{BufferKind, InterpolationError};
use num_traits::Float;
use tracing::debug;

/// Contract shared by every interpolation algorithm.
///
/// Implementors are stateless: every call is a pure function of its inputs,
/// so a single instance can be shared freely across threads.
///
/// # Mandatory operations
///
/// - [`kind`](Self::kind): identity token
/// - [`required_data_points`](Self::required_data_points): samples needed
///   for a degree
/// - [`interpolate_order_zero_into`](Self::interpolate_order_zero_into):
///   value-only evaluation
///
/// # Optional operation
///
/// Higher-order evaluation is exposed through [`derivatives`](Self::derivatives),
/// which returns `None` unless the algorithm implements
/// [`DerivativeInterpolation`]. Use [`evaluate`] to get the fallback to order
/// zero for free.
///
/// # Example
///
/// ```
/// use interp_core::algorithms::{InterpolationAlgorithm, LinearApproximation};
/// use interp_core::table::SampleTable;
///
/// let table = SampleTable::new(&[0.0, 1.0], &[10.0, 20.0], 1).unwrap();
/// let y = LinearApproximation.interpolate_order_zero(0.5, &table).unwrap();
/// assert_eq!(y, vec![15.0]);
/// assert!(InterpolationAlgorithm::<f64>::derivatives(&LinearApproximation).is_none());
/// ```
pub trait InterpolationAlgorithm<T: Float> {
    /// Identity token of this algorithm.
    fn kind(&self) -> AlgorithmKind;

    /// Stable algorithm name ("Linear", "Lagrange", "Hermite").
    #[inline]
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Minimum number of samples needed to reach polynomial `degree` when each
    /// sample carries `input_order` derivative levels.
    ///
    /// Deterministic, always positive, and non-decreasing in `degree`. Not
    /// checked against any table.
    fn required_data_points(&self, degree: usize, input_order: usize) -> usize;

    /// Interpolate the value block at `x` into `result`.
    ///
    /// Algorithms that consume supplied derivative levels (Hermite) use them
    /// here as well; the others read only the value level of each sample.
    /// `result` must hold exactly `table.stride()` entries; nothing is written
    /// unless the call succeeds.
    fn interpolate_order_zero_into(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        result: &mut [T],
    ) -> Result<(), InterpolationError>;

    /// Interpolate the value block at `x` into a freshly allocated buffer.
    fn interpolate_order_zero(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
    ) -> Result<Vec<T>, InterpolationError> {
        let mut result = vec![T::zero(); table.stride()];
        self.interpolate_order_zero_into(x, table, &mut result)?;
        Ok(result)
    }

    /// Higher-order capability, if this algorithm has one.
    #[inline]
    fn derivatives(&self) -> Option<&dyn DerivativeInterpolation<T>> {
        None
    }
}

/// Optional higher-order capability: values plus derivatives.
pub trait DerivativeInterpolation<T: Float> {
    /// Interpolate the value and `output_order` derivative levels at `x`,
    /// consuming the `table.input_order()` levels supplied with each sample.
    ///
    /// `result` must hold exactly `table.stride() * (output_order + 1)`
    /// entries, laid out value block first. Nothing is written unless the call
    /// succeeds.
    fn interpolate_into(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        output_order: usize,
        result: &mut [T],
    ) -> Result<(), InterpolationError>;

    /// Same as [`interpolate_into`](Self::interpolate_into) with a freshly
    /// allocated buffer.
    fn interpolate(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        output_order: usize,
    ) -> Result<Vec<T>, InterpolationError> {
        let mut result = vec![T::zero(); result_len(table.stride(), output_order)];
        self.interpolate_into(x, table, output_order, &mut result)?;
        Ok(result)
    }
}

/// Result of [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolated<T> {
    /// Value block followed by `derivative_levels` derivative blocks.
    pub values: Vec<T>,
    /// Channels per block.
    pub stride: usize,
    /// Derivative levels actually computed. Zero when the algorithm has no
    /// higher-order capability, whatever was requested.
    pub derivative_levels: usize,
}

impl<T: Copy> Interpolated<T> {
    /// Interpolated value block.
    #[inline]
    pub fn value(&self) -> &[T] {
        &self.values[..self.stride]
    }

    /// Derivative block `level`, or `None` if it was not computed.
    pub fn derivative(&self, level: usize) -> Option<&[T]> {
        if level > self.derivative_levels {
            return None;
        }
        let start = level * self.stride;
        Some(&self.values[start..start + self.stride])
    }
}

/// Interpolate with the fallback rule applied.
///
/// Uses the algorithm's higher-order capability when it has one; otherwise
/// falls back to order zero and reports `derivative_levels == 0`, in which
/// case derivative levels above zero are unsupported rather than zero.
///
/// # Example
///
/// ```
/// use interp_core::algorithms::{evaluate, HermitePolynomialApproximation, LinearApproximation};
/// use interp_core::table::SampleTable;
///
/// let table = SampleTable::new(&[0.0, 2.0], &[0.0, 4.0], 1).unwrap();
///
/// let linear = evaluate(&LinearApproximation, 1.0, &table, 1).unwrap();
/// assert_eq!(linear.derivative_levels, 0);
/// assert!(linear.derivative(1).is_none());
///
/// let hermite = evaluate(&HermitePolynomialApproximation, 1.0, &table, 1).unwrap();
/// assert_eq!(hermite.derivative(1), Some(&[2.0][..]));
/// ```
pub fn evaluate<T, A>(
    algorithm: &A,
    x: T,
    table: &SampleTable<'_, T>,
    output_order: usize,
) -> Result<Interpolated<T>, InterpolationError>
where
    T: Float,
    A: InterpolationAlgorithm<T> + ?Sized,
{
    match algorithm.derivatives() {
        Some(higher) => Ok(Interpolated {
            values: higher.interpolate(x, table, output_order)?,
            stride: table.stride(),
            derivative_levels: output_order,
        }),
        None => {
            if output_order > 0 {
                debug!(
                    algorithm = algorithm.name(),
                    output_order, "no derivative support, falling back to order zero"
                );
            }
            Ok(Interpolated {
                values: algorithm.interpolate_order_zero(x, table)?,
                stride: table.stride(),
                derivative_levels: 0,
            })
        }
    }
}

/// Reject non-finite query points.
pub(crate) fn check_query<T: Float>(x: T) -> Result<(), InterpolationError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(InterpolationError::NonFiniteInput(format!(
            "query point {} is not finite",
            x.to_f64().unwrap_or(f64::NAN)
        )))
    }
}

/// Reject result buffers whose length is not exactly `expected`.
pub(crate) fn check_result_len<T>(result: &[T], expected: usize) -> Result<(), InterpolationError> {
    if result.len() == expected {
        Ok(())
    } else {
        Err(InterpolationError::BufferLength {
            buffer: BufferKind::Result,
            expected,
            got: result.len(),
        })
    }
}
