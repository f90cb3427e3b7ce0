//! # interp_core: Interpolation of Strided, Time-Stamped Sample Tables
//!
//! Evaluates a smooth estimate of a vector-valued quantity (position,
//! velocity, orientation, ...) at an arbitrary independent-variable value from
//! a table of known samples.
//!
//! - Sample table accessor with all stride arithmetic in one place (`table`)
//! - Interpolation contract and three algorithms (`algorithms`)
//! - Error types with shape / numeric classification (`types::error`)
//!
//! ## Algorithms
//!
//! | Algorithm | Samples for degree `d` | Derivatives |
//! |-----------|------------------------|-------------|
//! | Linear    | 2                      | no          |
//! | Lagrange  | `d + 1`                | output only |
//! | Hermite   | `max(ceil((d+1)/(k+1)), 2)` for `k` input levels | input and output |
//!
//! Every call is a pure function of its inputs: no shared state, no caching,
//! safe to call concurrently. Sample-window selection is the caller's job;
//! each algorithm uses exactly the table it is given.
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::algorithms::{
//!     DerivativeInterpolation, HermitePolynomialApproximation, InterpolationAlgorithm,
//!     LinearApproximation,
//! };
//! use interp_core::table::SampleTable;
//!
//! // Two 3-channel position samples
//! let times = [0.0_f64, 2.0];
//! let positions = [0.0, 0.0, 0.0, 2.0, 4.0, 6.0];
//! let table = SampleTable::new(&times, &positions, 3).unwrap();
//!
//! let p = LinearApproximation.interpolate_order_zero(1.0, &table).unwrap();
//! assert_eq!(p, vec![1.0, 2.0, 3.0]);
//!
//! // Same samples with velocities interleaved after each position block
//! let with_velocity = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 2.0, 3.0];
//! let table = SampleTable::with_derivatives(&times, &with_velocity, 3, 1).unwrap();
//!
//! let pv = HermitePolynomialApproximation.interpolate(1.0, &table, 1).unwrap();
//! assert!((pv[0] - 1.0).abs() < 1e-12); // position x
//! assert!((pv[3] - 1.0).abs() < 1e-12); // velocity x
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Dual number alias and AD verification tests
//! - `serde`: Serialisation for `AlgorithmKind` and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod algorithms;
pub mod table;
pub mod types;
