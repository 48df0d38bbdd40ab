//! Survey dataset loader.
//!
//! Reads the NHTS origin/destination CSV into memory, keeping only the
//! `mode` column, the configured mode-distance fields and
//! `annual_total_trips`. Every other column is ignored.

use super::schema::{ANNUAL_TOTAL_COLUMN, MODE_COLUMN};
use crate::utils::config::ReportConfig;
use crate::utils::error::DatasetError;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One row of the survey dataset
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Value of the `mode` category column
    pub mode: String,

    /// Trip counts aligned with [`Dataset::fields`]
    pub counts: Vec<f64>,

    /// Recorded total for the row
    pub annual_total_trips: f64,
}

impl TripRecord {
    /// Sum of every mode-distance field in the row
    pub fn distance_sum(&self) -> f64 {
        self.counts.iter().sum()
    }
}

/// The loaded dataset: field names plus the rows that carry them.
///
/// Every record holds exactly one count per field; [`Dataset::push`]
/// rejects anything else.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Mode-distance field names, in the order of [`TripRecord::counts`]
    fields: Vec<String>,

    records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            records: Vec::new(),
        }
    }

    /// Append a record
    ///
    /// # Errors
    /// * `DatasetError::FieldCountMismatch` - `counts` does not line up with the fields
    pub fn push(&mut self, record: TripRecord) -> Result<(), DatasetError> {
        if record.counts.len() != self.fields.len() {
            return Err(DatasetError::FieldCountMismatch {
                expected: self.fields.len(),
                actual: record.counts.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Positions of `names` within the record counts.
    ///
    /// # Errors
    /// * `DatasetError::MissingColumns` - listing every name not loaded
    pub fn column_indices(&self, names: &[String]) -> Result<Vec<usize>, DatasetError> {
        let mut indices = Vec::with_capacity(names.len());
        let mut missing = Vec::new();

        for name in names {
            match self.field_index(name) {
                Some(idx) => indices.push(idx),
                None => missing.push(name.clone()),
            }
        }

        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(DatasetError::MissingColumns(missing))
        }
    }

    /// Sum of `annual_total_trips` over all rows
    pub fn annual_total(&self) -> f64 {
        self.records.iter().map(|r| r.annual_total_trips).sum()
    }
}

/// Load the dataset at `path`
///
/// **Public** - main entry point for reading survey data
///
/// # Errors
/// * `DatasetError::Io` - file missing or unreadable
/// * `DatasetError::MissingColumns` - a required column is absent
/// * `DatasetError::InvalidNumber` - a numeric cell does not parse
pub fn load_dataset(
    path: impl AsRef<Path>,
    config: &ReportConfig,
) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();

    info!("Loading dataset: {}", path.display());

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_dataset(BufReader::new(file), config)?;

    info!(
        "Loaded {} records ({} mode-distance fields)",
        dataset.len(),
        dataset.fields.len()
    );

    Ok(dataset)
}

/// Parse a dataset from any CSV source
///
/// **Public** - also used by tests with in-memory data
pub fn read_dataset<R: Read>(reader: R, config: &ReportConfig) -> Result<Dataset, DatasetError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(DatasetError::Empty);
    }

    let fields = config.field_names();
    let layout = ColumnLayout::resolve(&headers, &fields)?;

    debug!(
        "Resolved {} required columns out of {} in header",
        fields.len() + 2,
        headers.len()
    );

    let mut dataset = Dataset::new(fields);
    let mut record = StringRecord::new();

    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        dataset.push(layout.parse_row(&record, line)?)?;
    }

    Ok(dataset)
}

/// Header positions of the columns we read
///
/// **Private** - internal to the loader
struct ColumnLayout {
    mode: usize,
    annual_total: usize,
    fields: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord, fields: &[String]) -> Result<Self, DatasetError> {
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name, idx))
            .collect();

        let mut missing = Vec::new();
        let mut find = |name: &str| -> usize {
            match positions.get(name) {
                Some(&idx) => idx,
                None => {
                    missing.push(name.to_string());
                    usize::MAX
                }
            }
        };

        let mode = find(MODE_COLUMN);
        let fields: Vec<(usize, String)> = fields
            .iter()
            .map(|name| (find(name), name.clone()))
            .collect();
        let annual_total = find(ANNUAL_TOTAL_COLUMN);

        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        Ok(Self {
            mode,
            annual_total,
            fields,
        })
    }

    fn parse_row(&self, record: &StringRecord, line: u64) -> Result<TripRecord, DatasetError> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let counts = self
            .fields
            .iter()
            .map(|(idx, name)| parse_count(cell(*idx), name, line))
            .collect::<Result<Vec<f64>, DatasetError>>()?;

        Ok(TripRecord {
            mode: cell(self.mode).to_string(),
            counts,
            annual_total_trips: parse_count(cell(self.annual_total), ANNUAL_TOTAL_COLUMN, line)?,
        })
    }
}

/// Parse one numeric cell; blank and `NaN` cells count as zero
fn parse_count(raw: &str, column: &str, line: u64) -> Result<f64, DatasetError> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(0.0);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DatasetError::InvalidNumber {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}
