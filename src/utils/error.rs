//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the survey dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Cannot open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset has no header row")]
    Empty,

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Record has {actual} trip counts, dataset has {expected} fields")]
    FieldCountMismatch { expected: usize, actual: usize },

    #[error("Invalid number {value:?} in column '{column}' (line {line})")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
}

/// Errors that can occur during chart composition and rasterization
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Generated SVG could not be parsed: {0}")]
    InvalidSvg(String),

    #[error("PNG encoding failed: {0}")]
    Raster(String),

    #[error("Chart canvas has zero size")]
    EmptyCanvas,

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Unrecognised {kind} '{value}' in aggregated table")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("Invalid value {value:?} for {field}")]
    InvalidValue { field: String, value: String },
}
