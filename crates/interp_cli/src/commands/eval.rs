//! Eval command implementation
//!
//! Interpolates a sample file at one or more points.

use interp_core::algorithms::{evaluate, Algorithm, AlgorithmKind, InterpolationAlgorithm};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::config::{InterpConfig, OutputFormat};
use crate::samples::SampleSet;
use crate::Result;

/// Interpolated levels at one query point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub x: f64,
    pub algorithm: AlgorithmKind,
    /// Derivative levels actually computed
    pub derivative_levels: usize,
    /// `levels[0]` is the value block, `levels[d]` derivative `d`
    pub levels: Vec<Vec<f64>>,
}

/// Run the eval command
pub fn run(config: &InterpConfig, samples: &str, at: &[f64], window_start: usize) -> Result<()> {
    info!("Starting evaluation...");
    info!("  Samples: {}", samples);
    info!("  Algorithm: {}", config.algorithm);
    info!("  Output order: {}", config.output_order);

    let samples = SampleSet::load(Path::new(samples), config.input_order)?;
    let evaluations = evaluate_points(config, &samples, at, window_start)?;
    println!("{}", render(&evaluations, config.format)?);

    info!("Evaluation complete");
    Ok(())
}

/// Evaluate every point in `at` against the configured window of `samples`.
///
/// With a degree configured the window holds `required_data_points(degree,
/// input_order)` samples from `window_start`; otherwise it runs from
/// `window_start` to the end of the table.
pub fn evaluate_points(
    config: &InterpConfig,
    samples: &SampleSet,
    at: &[f64],
    window_start: usize,
) -> Result<Vec<Evaluation>> {
    let table = samples.table()?;
    let algorithm = Algorithm::from_kind(config.algorithm);

    let window = match config.degree {
        Some(degree) => {
            let len = InterpolationAlgorithm::<f64>::required_data_points(
                &algorithm,
                degree,
                table.input_order(),
            );
            info!(degree, start = window_start, len, "selecting sample window");
            table.window(window_start, len)?
        }
        None if window_start > 0 => {
            table.window(window_start, table.len().saturating_sub(window_start))?
        }
        None => table,
    };

    if config.output_order > 0 && !algorithm.supports_derivatives() {
        warn!(
            algorithm = %config.algorithm,
            output_order = config.output_order,
            "algorithm has no derivative support; only values will be reported"
        );
    }

    at.iter()
        .map(|&x| {
            let out = evaluate(&algorithm, x, &window, config.output_order)?;
            Ok(Evaluation {
                x,
                algorithm: config.algorithm,
                derivative_levels: out.derivative_levels,
                levels: out.values.chunks(out.stride).map(<[f64]>::to_vec).collect(),
            })
        })
        .collect()
}

/// Render evaluations in the requested format.
pub fn render(evaluations: &[Evaluation], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluations)?),
        OutputFormat::Table => Ok(render_table(evaluations)),
    }
}

fn render_table(evaluations: &[Evaluation]) -> String {
    let mut table = format!("{:>14}  {:>5}  values\n", "x", "level");
    for evaluation in evaluations {
        for (level, block) in evaluation.levels.iter().enumerate() {
            let x = if level == 0 {
                format!("{:>14.6}", evaluation.x)
            } else {
                " ".repeat(14)
            };
            let values: Vec<String> = block.iter().map(|v| format!("{:>18.9}", v)).collect();
            table.push_str(&format!("{}  {:>5}  {}\n", x, level, values.join(" ")));
        }
    }
    table
}
