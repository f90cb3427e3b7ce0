//! CLI configuration management
//!
//! Layers defaults, an optional TOML file, `INTERP_*` environment variables
//! and command-line overrides into a single [`InterpConfig`].

use interp_core::algorithms::AlgorithmKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::{CliError, Result};

/// Configuration file read when `--config` is not given. Optional.
pub const DEFAULT_CONFIG_FILE: &str = "interp.toml";

/// Prefix of environment variable overrides (`INTERP_DEGREE=3`).
pub const ENV_PREFIX: &str = "INTERP";

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                s
            ))),
        }
    }
}

impl OutputFormat {
    /// Name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved settings shared by all subcommands
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterpConfig {
    /// Algorithm used by `eval` and `required-points`
    #[serde(deserialize_with = "deserialize_algorithm")]
    pub algorithm: AlgorithmKind,
    /// Polynomial degree; selects a window of `required_data_points` samples
    pub degree: Option<usize>,
    /// Derivative levels stored per sample; `None` defers to the sample file
    pub input_order: Option<usize>,
    /// Derivative levels to compute
    pub output_order: usize,
    /// Result rendering
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> std::result::Result<AlgorithmKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    AlgorithmKind::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> std::result::Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::Lagrange,
            degree: None,
            input_order: None,
            output_order: 0,
            format: OutputFormat::Table,
        }
    }
}

impl InterpConfig {
    /// Load the file and environment layers on top of the defaults.
    ///
    /// A missing file is an error only when `required` is set.
    pub fn from_sources(path: &Path, required: bool) -> Result<Self> {
        Self::from_sources_with_prefix(path, required, ENV_PREFIX)
    }

    fn from_sources_with_prefix(path: &Path, required: bool, prefix: &str) -> Result<Self> {
        if required && !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let config = config::Config::builder()
            .add_source(config::File::from(path).required(required))
            .add_source(config::Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize::<InterpConfig>()?;

        debug!(?config, path = %path.display(), "configuration sources loaded");
        Ok(config)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<()> {
        if let Some(algorithm) = &cli.algorithm {
            self.algorithm = AlgorithmKind::from_str(algorithm)?;
        }
        if let Some(degree) = cli.degree {
            self.degree = Some(degree);
        }
        if let Some(input_order) = cli.input_order {
            self.input_order = Some(input_order);
        }
        if let Some(output_order) = cli.output_order {
            self.output_order = output_order;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file; `None` reads [`DEFAULT_CONFIG_FILE`] if present
    pub config_file: Option<PathBuf>,
    pub algorithm: Option<String>,
    pub degree: Option<usize>,
    pub input_order: Option<usize>,
    pub output_order: Option<usize>,
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<InterpConfig> {
    let mut config = match &cli.config_file {
        Some(path) => InterpConfig::from_sources(path, true)?,
        None => InterpConfig::from_sources(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    config.merge_with_cli(cli)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = InterpConfig::default();
        assert_eq!(config.algorithm, AlgorithmKind::Lagrange);
        assert_eq!(config.degree, None);
        assert_eq!(config.input_order, None);
        assert_eq!(config.output_order, 0);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv").unwrap_err(),
            CliError::InvalidArgument(_)
        ));
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }

    #[test]
    fn test_toml_file_layer() {
        let file = write_toml(
            r#"
            algorithm = "hermite"
            degree = 5
            input_order = 1
            output_order = 2
            format = "json"
        "#,
        );

        let config =
            InterpConfig::from_sources_with_prefix(file.path(), true, "INTERP_TEST_TOML").unwrap();
        assert_eq!(config.algorithm, AlgorithmKind::Hermite);
        assert_eq!(config.degree, Some(5));
        assert_eq!(config.input_order, Some(1));
        assert_eq!(config.output_order, 2);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let file = write_toml("degree = 3\n");

        let config =
            InterpConfig::from_sources_with_prefix(file.path(), true, "INTERP_TEST_PARTIAL")
                .unwrap();
        assert_eq!(config.degree, Some(3));
        assert_eq!(config.algorithm, AlgorithmKind::Lagrange);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_unknown_algorithm_in_file_rejected() {
        let file = write_toml("algorithm = \"spline\"\n");
        let err = InterpConfig::from_sources_with_prefix(file.path(), true, "INTERP_TEST_BAD")
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = write_toml("degree = 3\nalgorithm = \"lagrange\"\n");
        std::env::set_var("INTERP_TEST_ENV_DEGREE", "7");
        std::env::set_var("INTERP_TEST_ENV_ALGORITHM", "Hermite");

        let config =
            InterpConfig::from_sources_with_prefix(file.path(), true, "INTERP_TEST_ENV").unwrap();

        std::env::remove_var("INTERP_TEST_ENV_DEGREE");
        std::env::remove_var("INTERP_TEST_ENV_ALGORITHM");

        assert_eq!(config.degree, Some(7));
        assert_eq!(config.algorithm, AlgorithmKind::Hermite);
    }

    #[test]
    fn test_missing_optional_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config =
            InterpConfig::from_sources_with_prefix(&path, false, "INTERP_TEST_ABSENT").unwrap();
        assert_eq!(config, InterpConfig::default());
    }

    #[test]
    fn test_missing_required_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = InterpConfig::from_sources(&path, true).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = InterpConfig::default();
        let cli = CliArgs {
            algorithm: Some("linear".to_string()),
            degree: Some(1),
            output_order: Some(1),
            format: Some("json".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.algorithm, AlgorithmKind::Linear);
        assert_eq!(config.degree, Some(1));
        assert_eq!(config.input_order, None);
        assert_eq!(config.output_order, 1);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_args_merge_rejects_unknown_algorithm() {
        let mut config = InterpConfig::default();
        let cli = CliArgs {
            algorithm: Some("akima".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.merge_with_cli(&cli).unwrap_err(),
            CliError::Interpolation(_)
        ));
    }
}
