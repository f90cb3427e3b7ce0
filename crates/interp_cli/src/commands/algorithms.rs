//! Algorithms command implementation
//!
//! Lists the registered interpolation algorithms and their capabilities.

use interp_core::algorithms::{Algorithm, AlgorithmKind, InterpolationAlgorithm};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::Result;

/// Capabilities of one algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmInfo {
    pub algorithm: AlgorithmKind,
    pub supports_derivatives: bool,
    /// Samples needed for a cubic with values only
    pub cubic_samples: usize,
}

/// Run the algorithms command
pub fn run(format: OutputFormat) -> Result<()> {
    let listing = listing();
    info!("Listing {} algorithms", listing.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Table => {
            println!("{:<10}  {:<11}  {:>13}", "algorithm", "derivatives", "cubic samples");
            for entry in &listing {
                println!(
                    "{:<10}  {:<11}  {:>13}",
                    entry.algorithm.name(),
                    if entry.supports_derivatives { "yes" } else { "no" },
                    entry.cubic_samples
                );
            }
        }
    }
    Ok(())
}

/// Every algorithm with its capabilities, in a fixed order.
pub fn listing() -> Vec<AlgorithmInfo> {
    Algorithm::ALL
        .iter()
        .map(|algorithm| AlgorithmInfo {
            algorithm: InterpolationAlgorithm::<f64>::kind(algorithm),
            supports_derivatives: algorithm.supports_derivatives(),
            cubic_samples: InterpolationAlgorithm::<f64>::required_data_points(algorithm, 3, 0),
        })
        .collect()
}
