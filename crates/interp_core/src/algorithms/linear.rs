//! Linear approximation.

use super::traits::{check_query, check_result_len};
use super::{AlgorithmKind, InterpolationAlgorithm};
use crate::table::SampleTable;
use crate::types::InterpolationError;
use num_traits::Float;

/// Two-point linear approximation.
///
/// Consumes exactly two samples, normally the pair bracketing `x`; choosing
/// that pair from a larger table is up to the caller (see
/// [`SampleTable::window`]). Queries outside the pair extrapolate along the
/// same line.
///
/// There is no higher-order capability: [`derivatives`](InterpolationAlgorithm::derivatives)
/// returns `None`.
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
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LinearApproximation;

impl LinearApproximation {
    /// Number of samples consumed.
    pub const SAMPLES: usize = 2;
}

impl<T: Float> InterpolationAlgorithm<T> for LinearApproximation {
    #[inline]
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Linear
    }

    /// Always 2: a straight line cannot honour a higher degree.
    #[inline]
    fn required_data_points(&self, _degree: usize, _input_order: usize) -> usize {
        Self::SAMPLES
    }

    /// # Formula
    ///
    /// ```text
    /// t = (x - x0) / (x1 - x0)
    /// y = y0 * (1 - t) + y1 * t
    /// ```
    ///
    /// which equals `y0 + (y1 - y0) * t` but returns the sample blocks
    /// bit-for-bit at `x0` and `x1`.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` / `TooManySamples` - the table does not hold
    ///   exactly two samples
    /// * `BufferLength` - `result.len() != table.stride()`
    /// * `NonFiniteInput` - `x` is NaN or infinite
    fn interpolate_order_zero_into(
        &self,
        x: T,
        table: &SampleTable<'_, T>,
        result: &mut [T],
    ) -> Result<(), InterpolationError> {
        match table.len() {
            n if n < Self::SAMPLES => {
                return Err(InterpolationError::InsufficientData {
                    got: n,
                    need: Self::SAMPLES,
                })
            }
            n if n > Self::SAMPLES => {
                return Err(InterpolationError::TooManySamples {
                    got: n,
                    max: Self::SAMPLES,
                })
            }
            _ => {}
        }
        check_result_len(result, table.stride())?;
        check_query(x)?;

        let x0 = table.x(0);
        let x1 = table.x(1);
        // Non-zero: SampleTable rejects coincident neighbours
        let span = x1 - x0;
        let t = (x - x0) / span;
        let s = T::one() - t;
        let lower = table.value_block(0);
        let upper = table.value_block(1);
        for ((out, &y0), &y1) in result.iter_mut().zip(lower).zip(upper) {
            *out = y0 * s + y1 * t;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Contract Tests
    // ========================================

    #[test]
    fn test_kind_and_name() {
        assert_eq!(
            InterpolationAlgorithm::<f64>::kind(&LinearApproximation),
            AlgorithmKind::Linear
        );
        assert_eq!(
            InterpolationAlgorithm::<f64>::name(&LinearApproximation),
            "Linear"
        );
    }

    #[test]
    fn test_required_data_points_ignores_degree() {
        for degree in 0..10 {
            for input_order in 0..3 {
                assert_eq!(
                    InterpolationAlgorithm::<f64>::required_data_points(
                        &LinearApproximation,
                        degree,
                        input_order
                    ),
                    2
                );
            }
        }
    }

    #[test]
    fn test_no_derivative_capability() {
        assert!(InterpolationAlgorithm::<f64>::derivatives(&LinearApproximation).is_none());
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_midpoint() {
        let table = SampleTable::new(&[0.0, 1.0], &[10.0, 20.0], 1).unwrap();
        let y = LinearApproximation.interpolate_order_zero(0.5, &table).unwrap();
        assert_eq!(y, vec![15.0]);
    }

    #[test]
    fn test_endpoints_exact() {
        let xs = [2.0, 5.0];
        let ys = [1.25, -3.5, 7.0, 0.1, 9.75, 2.0];
        let table = SampleTable::new(&xs, &ys, 3).unwrap();

        let at_x0 = LinearApproximation.interpolate_order_zero(2.0, &table).unwrap();
        let at_x1 = LinearApproximation.interpolate_order_zero(5.0, &table).unwrap();
        assert_eq!(at_x0, ys[0..3].to_vec());
        assert_eq!(at_x1, ys[3..6].to_vec());
    }

    #[test]
    fn test_channels_in_lockstep() {
        let xs = [0.0, 4.0];
        let ys = [0.0, 10.0, 100.0, 4.0, 6.0, 0.0];
        let table = SampleTable::new(&xs, &ys, 3).unwrap();

        let y = LinearApproximation.interpolate_order_zero(1.0, &table).unwrap();
        assert_relative_eq!(y[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(y[1], 9.0, epsilon = 1e-12);
        assert_relative_eq!(y[2], 75.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation() {
        let table = SampleTable::new(&[0.0, 1.0], &[0.0, 2.0], 1).unwrap();

        let below = LinearApproximation.interpolate_order_zero(-1.0, &table).unwrap();
        let above = LinearApproximation.interpolate_order_zero(3.0, &table).unwrap();
        assert_relative_eq!(below[0], -2.0, epsilon = 1e-12);
        assert_relative_eq!(above[0], 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reads_value_level_only() {
        // Derivative levels present in the table are ignored
        let xs = [0.0, 1.0];
        let ys = [0.0, 100.0, 2.0, -100.0];
        let table = SampleTable::with_derivatives(&xs, &ys, 1, 1).unwrap();

        let y = LinearApproximation.interpolate_order_zero(0.25, &table).unwrap();
        assert_relative_eq!(y[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_into_caller_buffer() {
        let table = SampleTable::new(&[0.0, 2.0], &[0.0, 1.0, 4.0, 3.0], 2).unwrap();
        let mut buffer = [f64::NAN; 2];
        LinearApproximation
            .interpolate_order_zero_into(1.0, &table, &mut buffer)
            .unwrap();
        assert_eq!(buffer, [2.0, 2.0]);
    }

    #[test]
    fn test_f32() {
        let xs: [f32; 2] = [0.0, 1.0];
        let ys: [f32; 2] = [0.0, 2.0];
        let table = SampleTable::new(&xs, &ys, 1).unwrap();
        let y = LinearApproximation.interpolate_order_zero(0.5_f32, &table).unwrap();
        assert!((y[0] - 1.0_f32).abs() < 1e-6);
    }

    // ========================================
    // Error Tests
    // ========================================

    #[test]
    fn test_one_sample_is_insufficient() {
        let table = SampleTable::new(&[0.0], &[1.0], 1).unwrap();
        assert_eq!(
            LinearApproximation
                .interpolate_order_zero(0.0, &table)
                .unwrap_err(),
            InterpolationError::InsufficientData { got: 1, need: 2 }
        );
    }

    #[test]
    fn test_three_samples_rejected() {
        let table = SampleTable::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], 1).unwrap();
        assert_eq!(
            LinearApproximation
                .interpolate_order_zero(0.5, &table)
                .unwrap_err(),
            InterpolationError::TooManySamples { got: 3, max: 2 }
        );
    }

    #[test]
    fn test_coincident_pair_never_reaches_linear() {
        let err = SampleTable::new(&[1.0, 1.0], &[5.0, 6.0], 1).unwrap_err();
        assert!(matches!(err, InterpolationError::DegenerateSpacing { index: 1, .. }));
        assert!(err.is_numeric());
    }

    #[test]
    fn test_wrong_result_length_leaves_buffer_untouched() {
        let table = SampleTable::new(&[0.0, 1.0], &[0.0, 1.0], 1).unwrap();
        let mut buffer = [7.0; 2];
        let err = LinearApproximation
            .interpolate_order_zero_into(0.5, &table, &mut buffer)
            .unwrap_err();
        assert!(err.is_shape_violation());
        assert_eq!(buffer, [7.0, 7.0]);
    }

    #[test]
    fn test_non_finite_query() {
        let table = SampleTable::new(&[0.0, 1.0], &[0.0, 1.0], 1).unwrap();
        assert!(LinearApproximation
            .interpolate_order_zero(f64::NAN, &table)
            .is_err());
    }
}
