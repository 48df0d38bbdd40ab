//! Survey dataset parsing.
//!
//! This module handles:
//! - The column schema (modes, distance bands, field names)
//! - Loading the CSV dataset into typed records
//! - The versioned `summary.json` document

pub mod dataset;
pub mod schema;

// Re-export main types
pub use dataset::{load_dataset, read_dataset, Dataset, TripRecord};
pub use schema::{DistanceBand, Mode, TripSummary};
