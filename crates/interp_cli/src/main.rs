//! interp - Command Line Interpolation of Sample Files
//!
//! Operational entry point for the interp_core algorithms.
//!
//! # Commands
//!
//! - `interp eval --samples <file> --at <x>...` - Interpolate a sample file
//! - `interp required-points --degree <d>` - Samples an algorithm needs
//! - `interp algorithms` - List algorithms and their capabilities
//!
//! # Configuration
//!
//! Settings are read from `interp.toml` (or `--config`), then `INTERP_*`
//! environment variables, then command-line flags, later sources winning.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod samples;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Interpolate strided, time-stamped sample tables
#[derive(Parser)]
#[command(name = "interp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: interp.toml, if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate a sample file at one or more points
    Eval {
        /// Path to sample file (JSON/CSV)
        #[arg(short, long)]
        samples: String,

        /// Points to interpolate at
        #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
        at: Vec<f64>,

        /// Algorithm (linear, lagrange, hermite)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Polynomial degree; selects a window of the required sample count
        #[arg(short, long)]
        degree: Option<usize>,

        /// Derivative levels stored with each sample
        #[arg(long)]
        input_order: Option<usize>,

        /// Derivative levels to compute
        #[arg(short, long)]
        output_order: Option<usize>,

        /// First sample of the window
        #[arg(short, long, default_value = "0")]
        window_start: usize,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Number of samples an algorithm needs for a degree
    RequiredPoints {
        /// Algorithm (linear, lagrange, hermite)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Polynomial degree
        #[arg(short, long)]
        degree: usize,

        /// Derivative levels stored with each sample
        #[arg(long)]
        input_order: Option<usize>,
    },

    /// List available algorithms
    Algorithms {
        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config_file = cli.config;

    match cli.command {
        Commands::Eval {
            samples,
            at,
            algorithm,
            degree,
            input_order,
            output_order,
            window_start,
            format,
        } => {
            let config = build_config(&CliArgs {
                config_file,
                algorithm,
                degree,
                input_order,
                output_order,
                format,
            })?;
            commands::eval::run(&config, &samples, &at, window_start)
        }
        Commands::RequiredPoints {
            algorithm,
            degree,
            input_order,
        } => {
            let config = build_config(&CliArgs {
                config_file,
                algorithm,
                input_order,
                ..Default::default()
            })?;
            commands::required_points::run(
                config.algorithm,
                degree,
                config.input_order.unwrap_or(0),
            )
        }
        Commands::Algorithms { format } => {
            let config = build_config(&CliArgs {
                config_file,
                format,
                ..Default::default()
            })?;
            commands::algorithms::run(config.format)
        }
    }
}
