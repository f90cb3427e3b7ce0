//! Sample table accessor.
//!
//! [`SampleTable`] is a validated, borrowed view over the independent
//! variable values (`xs`) and the flat dependent-variable buffer (`ys`).
//! All stride arithmetic lives here; algorithms only go through the
//! accessor helpers.
//!
//! ## Layout
//!
//! For `stride` channels and `input_order` supplied derivative levels, each
//! sample occupies `stride * (input_order + 1)` consecutive entries:
//!
//! ```text
//! [ p1 q1 w1 | dp1 dq1 dw1 | ... ][ p2 q2 w2 | dp2 dq2 dw2 | ... ] ...
//!   value       level 1              value       level 1
//! ```

use crate::types::{BufferKind, InterpolationError};
use num_traits::Float;
use tracing::trace;

/// Validated view over a strided sample table.
///
/// # Invariants
///
/// - At least one sample
/// - `stride >= 1`
/// - `ys.len() == xs.len() * stride * (input_order + 1)`
/// - `xs` finite and strictly increasing, neighbours not coincident
///
/// # Example
///
/// ```
/// use interp_core::table::SampleTable;
///
/// // Two samples of a 2-channel quantity
/// let xs = [0.0, 1.0];
/// let ys = [10.0, 20.0, 11.0, 22.0];
/// let table = SampleTable::new(&xs, &ys, 2).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.value_block(1), &[11.0, 22.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTable<'a, T: Float> {
    xs: &'a [T],
    ys: &'a [T],
    stride: usize,
    input_order: usize,
}

impl<'a, T: Float> SampleTable<'a, T> {
    /// Build a value-only table (`input_order == 0`).
    ///
    /// # Errors
    ///
    /// * `InvalidStride` - `stride == 0`
    /// * `InsufficientData` - `xs` is empty
    /// * `LayoutOverflow` - `xs.len() * stride * (input_order + 1)` does not fit in `usize`
    /// * `BufferLength` - `ys.len() != xs.len() * stride`
    /// * `NonFiniteInput` - an `xs` entry is NaN or infinite
    /// * `NonMonotonicData` - `xs` decreases
    /// * `DegenerateSpacing` - two neighbouring `xs` entries coincide
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::table::SampleTable;
    ///
    /// let result = SampleTable::new(&[0.0, 1.0, 2.0], &[0.0; 5], 2);
    /// assert!(result.unwrap_err().is_shape_violation());
    /// ```
    pub fn new(xs: &'a [T], ys: &'a [T], stride: usize) -> Result<Self, InterpolationError> {
        Self::with_derivatives(xs, ys, stride, 0)
    }

    /// Build a table whose samples carry `input_order` derivative levels after
    /// the value block.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::table::SampleTable;
    ///
    /// // f(x) = x^2 with first derivatives: (value, slope) per sample
    /// let xs = [0.0, 1.0];
    /// let ys = [0.0, 0.0, 1.0, 2.0];
    /// let table = SampleTable::with_derivatives(&xs, &ys, 1, 1).unwrap();
    /// assert_eq!(table.level(1, 1, 0), 2.0);
    /// ```
    pub fn with_derivatives(
        xs: &'a [T],
        ys: &'a [T],
        stride: usize,
        input_order: usize,
    ) -> Result<Self, InterpolationError> {
        validate_shape(xs, ys, stride, input_order)
            .and_then(|()| validate_abscissae(xs))
            .inspect_err(|err| trace!(error = %err, "sample table rejected"))?;

        Ok(Self {
            xs,
            ys,
            stride,
            input_order,
        })
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Number of dependent-variable channels per sample.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of derivative levels supplied after each value block.
    #[inline]
    pub fn input_order(&self) -> usize {
        self.input_order
    }

    /// Number of `ys` entries per sample: `stride * (input_order + 1)`.
    #[inline]
    pub fn sample_width(&self) -> usize {
        self.stride * (self.input_order + 1)
    }

    /// Independent variable values.
    #[inline]
    pub fn xs(&self) -> &'a [T] {
        self.xs
    }

    /// Flat dependent-variable buffer.
    #[inline]
    pub fn ys(&self) -> &'a [T] {
        self.ys
    }

    /// Independent variable value of sample `i`.
    #[inline]
    pub fn x(&self, i: usize) -> T {
        self.xs[i]
    }

    /// Value of `channel` at sample `i`.
    #[inline]
    pub fn value(&self, i: usize, channel: usize) -> T {
        self.level(i, 0, channel)
    }

    /// Derivative `level` of `channel` at sample `i` (level 0 is the value).
    ///
    /// # Panics
    ///
    /// Panics if `i`, `level` or `channel` is out of range.
    #[inline]
    pub fn level(&self, i: usize, level: usize, channel: usize) -> T {
        assert!(level <= self.input_order, "level out of range");
        assert!(channel < self.stride, "channel out of range");
        self.ys[self.offset(i, level) + channel]
    }

    /// Value block (`stride` entries) of sample `i`.
    #[inline]
    pub fn value_block(&self, i: usize) -> &'a [T] {
        self.level_block(i, 0)
    }

    /// Block of derivative `level` (`stride` entries) of sample `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `level` is out of range.
    #[inline]
    pub fn level_block(&self, i: usize, level: usize) -> &'a [T] {
        assert!(level <= self.input_order, "level out of range");
        let start = self.offset(i, level);
        &self.ys[start..start + self.stride]
    }

    /// First and last independent variable values.
    ///
    /// Queries outside this range extrapolate.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// View of `len` consecutive samples starting at `start`.
    ///
    /// No window is ever chosen on the caller's behalf; this only slices.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` - `len == 0` or the table has fewer than
    ///   `start + len` samples
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::table::SampleTable;
    ///
    /// let xs = [0.0, 1.0, 2.0, 3.0];
    /// let ys = [0.0, 1.0, 4.0, 9.0];
    /// let table = SampleTable::new(&xs, &ys, 1).unwrap();
    ///
    /// let window = table.window(1, 2).unwrap();
    /// assert_eq!(window.xs(), &[1.0, 2.0]);
    /// assert_eq!(window.ys(), &[1.0, 4.0]);
    /// ```
    pub fn window(&self, start: usize, len: usize) -> Result<Self, InterpolationError> {
        let available = self.xs.len().saturating_sub(start);
        if len == 0 || len > available {
            return Err(InterpolationError::InsufficientData {
                got: available,
                need: len.max(1),
            });
        }

        let width = self.sample_width();
        Ok(Self {
            xs: &self.xs[start..start + len],
            ys: &self.ys[start * width..(start + len) * width],
            stride: self.stride,
            input_order: self.input_order,
        })
    }

    #[inline]
    fn offset(&self, i: usize, level: usize) -> usize {
        i * self.sample_width() + level * self.stride
    }
}

/// Length of a result buffer holding a value and `output_order` derivative
/// levels of `stride` channels.
///
/// ```
/// assert_eq!(interp_core::table::result_len(3, 2), 9);
/// ```
#[inline]
pub fn result_len(stride: usize, output_order: usize) -> usize {
    // Saturates on overflow; no real buffer matches usize::MAX
    stride.saturating_mul(output_order.saturating_add(1))
}

fn validate_shape<T: Float>(
    xs: &[T],
    ys: &[T],
    stride: usize,
    input_order: usize,
) -> Result<(), InterpolationError> {
    if stride == 0 {
        return Err(InterpolationError::InvalidStride);
    }
    if xs.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }

    let expected = input_order
        .checked_add(1)
        .and_then(|levels| levels.checked_mul(stride))
        .and_then(|width| width.checked_mul(xs.len()))
        .ok_or(InterpolationError::LayoutOverflow {
            samples: xs.len(),
            stride,
            input_order,
        })?;
    if ys.len() != expected {
        return Err(InterpolationError::BufferLength {
            buffer: BufferKind::YTable,
            expected,
            got: ys.len(),
        });
    }
    Ok(())
}

/// Check `xs` is finite and strictly increasing with no coincident neighbours.
///
/// Neighbours closer than one machine epsilon relative to their magnitude
/// count as coincident.
fn validate_abscissae<T: Float>(xs: &[T]) -> Result<(), InterpolationError> {
    if let Some(index) = xs.iter().position(|x| !x.is_finite()) {
        return Err(InterpolationError::NonFiniteInput(format!(
            "x table entry {} is not finite",
            index
        )));
    }

    for (index, pair) in xs.windows(2).enumerate().map(|(i, p)| (i + 1, p)) {
        let (prev, next) = (pair[0], pair[1]);
        let diff = next - prev;
        let tolerance = T::epsilon() * prev.abs().max(next.abs());

        if diff.abs() <= tolerance {
            return Err(InterpolationError::DegenerateSpacing {
                index,
                x: next.to_f64().unwrap_or(f64::NAN),
            });
        }
        if diff < T::zero() {
            return Err(InterpolationError::NonMonotonicData { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_single_channel() {
        let table = SampleTable::new(&[0.0, 1.0], &[10.0, 20.0], 1).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.stride(), 1);
        assert_eq!(table.input_order(), 0);
        assert_eq!(table.sample_width(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_new_single_sample_allowed() {
        let table = SampleTable::new(&[3.0], &[1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.domain(), (3.0, 3.0));
    }

    #[test]
    fn test_new_zero_stride() {
        let result = SampleTable::new(&[0.0, 1.0], &[], 0);
        assert_eq!(result.unwrap_err(), InterpolationError::InvalidStride);
    }

    #[test]
    fn test_new_empty_table() {
        let xs: [f64; 0] = [];
        let result = SampleTable::new(&xs, &xs, 1);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 0);
                assert_eq!(need, 1);
            }
            other => panic!("Expected InsufficientData error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_y_length_mismatch() {
        // 5 != 3 * 2
        let result = SampleTable::new(&[0.0, 1.0, 2.0], &[0.0; 5], 2);
        match result.unwrap_err() {
            InterpolationError::BufferLength {
                buffer,
                expected,
                got,
            } => {
                assert_eq!(buffer, BufferKind::YTable);
                assert_eq!(expected, 6);
                assert_eq!(got, 5);
            }
            other => panic!("Expected BufferLength error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_derivatives_length_accounts_for_levels() {
        // 2 samples * stride 3 * (2 levels + 1)
        let ys = [0.0; 18];
        assert!(SampleTable::with_derivatives(&[0.0, 1.0], &ys, 3, 2).is_ok());
        assert!(SampleTable::with_derivatives(&[0.0, 1.0], &ys, 3, 1).is_err());
    }

    #[test]
    fn test_new_decreasing_xs() {
        let result = SampleTable::new(&[0.0, 2.0, 1.0], &[0.0; 3], 1);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_new_duplicate_xs_is_numeric_degeneracy() {
        let result = SampleTable::new(&[1.0, 1.0], &[5.0, 5.0], 1);
        let err = result.unwrap_err();
        assert!(err.is_numeric());
        assert_eq!(
            err,
            InterpolationError::DegenerateSpacing { index: 1, x: 1.0 }
        );
    }

    #[test]
    fn test_new_nearly_coincident_xs() {
        let a = 1.0_f64;
        let b = a + f64::EPSILON;
        let xs = [a, b];
        let result = SampleTable::new(&xs, &[0.0, 1.0], 1);
        assert!(result.unwrap_err().is_numeric());
    }

    #[test]
    fn test_new_small_but_distinct_spacing_near_zero() {
        // Absolute spacing is tiny but large relative to magnitude
        let result = SampleTable::new(&[0.0, 1e-300], &[0.0, 1.0], 1);
        assert!(result.is_ok());
    }

    #[test]
    fn test_new_non_finite_xs() {
        let result = SampleTable::new(&[0.0, f64::NAN], &[0.0, 1.0], 1);
        assert!(matches!(
            result.unwrap_err(),
            InterpolationError::NonFiniteInput(_)
        ));

        let result = SampleTable::new(&[0.0, f64::INFINITY], &[0.0, 1.0], 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_with_f32() {
        let xs: [f32; 3] = [0.0, 1.0, 2.0];
        let ys: [f32; 3] = [0.0, 1.0, 4.0];
        assert!(SampleTable::new(&xs, &ys, 1).is_ok());
    }

    // ========================================
    // Accessor Tests
    // ========================================

    #[test]
    fn test_value_and_level_accessors() {
        // stride 2, input order 1: [v0 v1 | d0 d1] per sample
        let xs = [0.0, 1.0];
        let ys = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let table = SampleTable::with_derivatives(&xs, &ys, 2, 1).unwrap();

        assert_eq!(table.sample_width(), 4);
        assert_eq!(table.value(0, 0), 1.0);
        assert_eq!(table.value(0, 1), 2.0);
        assert_eq!(table.level(0, 1, 0), 3.0);
        assert_eq!(table.level(0, 1, 1), 4.0);
        assert_eq!(table.value(1, 0), 5.0);
        assert_eq!(table.level(1, 1, 1), 8.0);

        assert_eq!(table.value_block(1), &[5.0, 6.0]);
        assert_eq!(table.level_block(0, 1), &[3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "level out of range")]
    fn test_level_beyond_input_order_panics() {
        let table = SampleTable::new(&[0.0, 1.0], &[0.0, 1.0], 1).unwrap();
        let _ = table.level(0, 1, 0);
    }

    #[test]
    #[should_panic(expected = "channel out of range")]
    fn test_channel_beyond_stride_panics() {
        let table = SampleTable::new(&[0.0, 1.0], &[0.0, 1.0], 1).unwrap();
        let _ = table.value(0, 1);
    }

    #[test]
    fn test_domain() {
        let table = SampleTable::new(&[-2.0, 0.0, 2.0], &[4.0, 0.0, 4.0], 1).unwrap();
        assert_eq!(table.domain(), (-2.0, 2.0));
    }

    // ========================================
    // Window Tests
    // ========================================

    #[test]
    fn test_window_slices_levels_together() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
        let table = SampleTable::with_derivatives(&xs, &ys, 1, 1).unwrap();

        let window = table.window(1, 2).unwrap();
        assert_eq!(window.xs(), &[1.0, 2.0]);
        assert_eq!(window.ys(), &[1.0, 1.5, 2.0, 2.5]);
        assert_eq!(window.input_order(), 1);
        assert_eq!(window.level(0, 1, 0), 1.5);
    }

    #[test]
    fn test_window_full_table() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let table = SampleTable::new(&xs, &ys, 1).unwrap();
        assert_eq!(table.window(0, 2).unwrap(), table);
    }

    #[test]
    fn test_window_out_of_range() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 2.0];
        let table = SampleTable::new(&xs, &ys, 1).unwrap();

        assert_eq!(
            table.window(2, 2).unwrap_err(),
            InterpolationError::InsufficientData { got: 1, need: 2 }
        );
        assert_eq!(
            table.window(5, 1).unwrap_err(),
            InterpolationError::InsufficientData { got: 0, need: 1 }
        );
        assert!(table.window(0, 0).is_err());
    }

    #[test]
    fn test_result_len() {
        assert_eq!(result_len(1, 0), 1);
        assert_eq!(result_len(3, 0), 3);
        assert_eq!(result_len(3, 2), 9);
        assert_eq!(result_len(2, usize::MAX), usize::MAX);
    }

    // ========================================
    // Overflow Tests
    // ========================================

    #[test]
    fn test_huge_stride_rejected() {
        let err = SampleTable::<f64>::new(&[0.0, 1.0], &[], 1 << 63).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::LayoutOverflow {
                samples: 2,
                stride: 1 << 63,
                input_order: 0,
            }
        );
        assert!(err.is_shape_violation());
    }

    #[test]
    fn test_huge_input_order_rejected() {
        let err = SampleTable::<f64>::with_derivatives(&[0.0], &[], 1, usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            InterpolationError::LayoutOverflow {
                input_order: usize::MAX,
                ..
            }
        ));
    }

    #[test]
    fn test_large_but_addressable_layout_is_length_mismatch() {
        let err = SampleTable::<f64>::with_derivatives(&[0.0], &[1.0], 1 << 40, 3).unwrap_err();
        assert_eq!(
            err,
            InterpolationError::BufferLength {
                buffer: BufferKind::YTable,
                expected: 1 << 42,
                got: 1,
            }
        );
    }
}
