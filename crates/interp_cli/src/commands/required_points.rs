//! Required-points command implementation

use interp_core::algorithms::{Algorithm, AlgorithmKind, InterpolationAlgorithm};
use tracing::info;

use crate::Result;

/// Run the required-points command
pub fn run(algorithm: AlgorithmKind, degree: usize, input_order: usize) -> Result<()> {
    let points = required_points(algorithm, degree, input_order);
    info!(%algorithm, degree, input_order, points, "required data points");
    println!("{}", points);
    Ok(())
}

/// Samples `algorithm` needs for `degree` with `input_order` levels per sample.
pub fn required_points(algorithm: AlgorithmKind, degree: usize, input_order: usize) -> usize {
    InterpolationAlgorithm::<f64>::required_data_points(
        &Algorithm::from_kind(algorithm),
        degree,
        input_order,
    )
}
