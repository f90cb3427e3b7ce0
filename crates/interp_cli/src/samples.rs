//! Sample file loading.
//!
//! Two formats are accepted:
//!
//! - JSON: `{ "x": [...], "y": [...], "stride": N, "input_order": K }`, with
//!   `input_order` optional (default 0) and `y` in the interleaved layout.
//! - CSV: one sample per row, `x` followed by the sample's value block and
//!   then each derivative block. An optional header row is skipped.

use interp_core::table::SampleTable;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::{CliError, Result};

/// Owned sample data read from disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleSet {
    /// Independent variable values
    pub x: Vec<f64>,
    /// Interleaved dependent values
    pub y: Vec<f64>,
    /// Channels per level
    pub stride: usize,
    /// Derivative levels per sample
    #[serde(default)]
    pub input_order: usize,
}

impl SampleSet {
    /// Load a `.json` or `.csv` sample file.
    ///
    /// `input_order` describes the CSV column layout; for JSON files it must
    /// agree with the file when given.
    pub fn load(path: &Path, input_order: Option<usize>) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let samples = match extension.as_deref() {
            Some("json") => {
                let samples = Self::from_json_reader(BufReader::new(File::open(path)?))?;
                match input_order {
                    Some(k) if k != samples.input_order => {
                        return Err(CliError::InvalidArgument(format!(
                            "input order {} does not match {} declared in {}",
                            k,
                            samples.input_order,
                            path.display()
                        )));
                    }
                    _ => samples,
                }
            }
            Some("csv") => Self::from_csv_reader(File::open(path)?, input_order.unwrap_or(0))?,
            _ => {
                return Err(CliError::InvalidArgument(format!(
                    "Unsupported sample file: {}. Supported: .json, .csv",
                    path.display()
                )));
            }
        };

        info!(
            path = %path.display(),
            samples = samples.x.len(),
            stride = samples.stride,
            input_order = samples.input_order,
            "sample file loaded"
        );
        Ok(samples)
    }

    /// Parse the JSON layout.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse the CSV layout with `input_order` derivative blocks per row.
    pub fn from_csv_reader<R: Read>(reader: R, input_order: usize) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut width = None;

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let fields = match record
                .iter()
                .map(str::parse::<f64>)
                .collect::<std::result::Result<Vec<_>, _>>()
            {
                Ok(fields) => fields,
                Err(_) if row == 0 => {
                    debug!("skipping CSV header row");
                    continue;
                }
                Err(err) => {
                    return Err(CliError::Samples(format!("row {}: {}", row + 1, err)));
                }
            };

            if fields.len() < 2 {
                return Err(CliError::Samples(format!(
                    "row {}: expected x followed by at least one value",
                    row + 1
                )));
            }
            width.get_or_insert(fields.len() - 1);
            x.push(fields[0]);
            y.extend_from_slice(&fields[1..]);
        }

        let width = width.ok_or_else(|| CliError::Samples("no sample rows".to_string()))?;
        let levels = input_order.checked_add(1).ok_or_else(|| {
            CliError::Samples(format!("input order {} is out of range", input_order))
        })?;
        if width % levels != 0 {
            return Err(CliError::Samples(format!(
                "{} value columns cannot be split into {} levels",
                width, levels
            )));
        }

        Ok(Self {
            x,
            y,
            stride: width / levels,
            input_order,
        })
    }

    /// Validated table view over the loaded data.
    pub fn table(&self) -> Result<SampleTable<'_, f64>> {
        Ok(SampleTable::with_derivatives(
            &self.x,
            &self.y,
            self.stride,
            self.input_order,
        )?)
    }
}
