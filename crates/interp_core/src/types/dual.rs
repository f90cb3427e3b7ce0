//! Dual number type integration for automatic differentiation.
//!
//! Every algorithm is generic over `T: Float`, so a sample table built from
//! dual numbers propagates first derivatives through the interpolation with
//! respect to whatever input carries a non-zero dual part. This is used to
//! cross-check the analytic derivative paths.
//!
//! ## Usage
//!
//! ```
//! use interp_core::algorithms::{InterpolationAlgorithm, LagrangePolynomialApproximation};
//! use interp_core::table::SampleTable;
//! use interp_core::types::dual::DualNumber;
//!
//! let xs = [DualNumber::from(0.0), DualNumber::from(1.0), DualNumber::from(2.0)];
//! let ys = [DualNumber::from(0.0), DualNumber::from(1.0), DualNumber::from(4.0)];
//! let table = SampleTable::new(&xs, &ys, 1).unwrap();
//!
//! // Seed dx/dx = 1 on the query point
//! let x = DualNumber::new(1.5, 1.0);
//! let y = LagrangePolynomialApproximation
//!     .interpolate_order_zero(x, &table)
//!     .unwrap();
//!
//! assert!((y[0].re - 2.25).abs() < 1e-12);
//! assert!((y[0].eps - 3.0).abs() < 1e-12); // d(x^2)/dx at 1.5
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
#[cfg(feature = "num-dual-mode")]
pub type DualNumber = num_dual::Dual64;
