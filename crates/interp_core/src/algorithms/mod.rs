//! Interpolation algorithms for strided sample tables.
//!
//! ## Available Algorithms
//!
//! - [`LinearApproximation`]: Two-point linear approximation (no derivatives)
//! - [`LagrangePolynomialApproximation`]: Lagrange basis polynomial over all samples,
//!   with analytic derivatives of the basis polynomials
//! - [`HermitePolynomialApproximation`]: Confluent divided differences over values and
//!   supplied derivative levels, with analytic output derivatives
//!
//! ## Core Traits
//!
//! - [`InterpolationAlgorithm`]: identity, `required_data_points`, and the mandatory
//!   order-zero evaluator
//! - [`DerivativeInterpolation`]: optional higher-order capability, queried through
//!   [`InterpolationAlgorithm::derivatives`]
//!
//! [`evaluate`] applies the fallback rule: algorithms without the higher-order
//! capability are evaluated at order zero and report no derivative levels.
//!
//! ## AD Compatibility
//!
//! All algorithms are generic over `T: num_traits::Float`, enabling use with:
//! - `f64` / `f32`: Standard floating-point computation
//! - `Dual64`: Automatic differentiation via num-dual
//!
//! ## Example
//!
//! ```
//! use interp_core::algorithms::{evaluate, Algorithm, AlgorithmKind, InterpolationAlgorithm};
//! use interp_core::table::SampleTable;
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 8.0, 27.0];
//! let table = SampleTable::new(&xs, &ys, 1).unwrap();
//!
//! let algorithm = Algorithm::from_kind(AlgorithmKind::Lagrange);
//! assert_eq!(InterpolationAlgorithm::<f64>::required_data_points(&algorithm, 3, 0), 4);
//!
//! let out = evaluate(&algorithm, 1.5, &table, 1).unwrap();
//! assert!((out.value()[0] - 3.375).abs() < 1e-12);
//! assert!((out.derivative(1).unwrap()[0] - 6.75).abs() < 1e-12);
//! ```

mod algorithm_enum;
mod hermite;
mod lagrange;
mod linear;
mod traits;


// Re-export public types at module level
pub use algorithm_enum::{Algorithm, AlgorithmKind};
pub use hermite::HermitePolynomialApproximation;
pub use lagrange::LagrangePolynomialApproximation;
pub use linear::LinearApproximation;
pub use traits::{evaluate, DerivativeInterpolation, InterpolationAlgorithm, Interpolated};
